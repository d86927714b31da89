//! Extraction prompt for technical manuals.

/// Placeholder used when the caller supplies no machine name.
const NAME_PLACEHOLDER: &str = "<NOME_MACCHINA>";

/// Build the extraction prompt for one chunk of manual text.
///
/// The instruction asks for exactly one JSON object with the fixed keys
/// `protocollo` / `endpoint` / `variabili`, empty string or empty list for
/// anything the chunk does not contain. The embedded chunk is truncated to
/// `chunk_size` characters even if the caller passed more.
pub fn build_prompt(chunk: &str, machine_name: Option<&str>, chunk_size: usize) -> String {
    let name = machine_name.unwrap_or(NAME_PLACEHOLDER);
    let text: String = chunk.chars().take(chunk_size).collect();

    format!(
        r#"Il seguente testo è parte di un manuale tecnico di una macchina industriale denominata "{name}".
Estrarre in modo strutturato le seguenti informazioni, anche se presenti in sezioni diverse o con formati variabili:
- Protocollo di comunicazione (es. Modbus, OPC UA, Euromap, etc.)
- Endpoint di connessione (es. IP e porta, parametri seriali, indirizzo del server, etc.)
- Tabella delle variabili di comunicazione: per ogni variabile estrarre:
    - nome (es. "Pressione di iniezione")
    - indirizzo o identificativo (es. "Registro 40010", "NodeID 102", ecc.)
    - tipo di dato (es. Integer, Float, Boolean, etc.)
    - accesso (lettura/scrittura, sola lettura, etc.)
    - descrizione (unità di misura, intervallo valori, dettagli aggiuntivi)

Restituire ESCLUSIVAMENTE un oggetto JSON nel formato seguente:

{{
    "protocollo": "...",
    "endpoint": "...",
    "variabili": [
        {{
            "nome": "...",
            "indirizzo": "...",
            "tipo_dato": "...",
            "accesso": "...",
            "descrizione": "..."
        }},
        ...
    ]
}}

Testo da analizzare:
<<<
{text}
>>>
Se i dati richiesti non sono presenti, restituire una stringa vuota ("") per il campo mancante o una lista vuota per le variabili.
"#
    )
}
