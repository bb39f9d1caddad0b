use axum::Json;
use serde::Serialize;

// Envelope padrão de sucesso: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct RespostaSucesso<T> {
    pub success: bool,
    pub data: T,
}

pub fn sucesso<T: Serialize>(data: T) -> Json<RespostaSucesso<T>> {
    Json(RespostaSucesso {
        success: true,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_de_sucesso_carrega_os_dados() {
        let Json(resposta) = sucesso(vec![1, 2, 3]);
        let valor = serde_json::to_value(&resposta).unwrap();

        assert_eq!(valor["success"], true);
        assert_eq!(valor["data"], serde_json::json!([1, 2, 3]));
    }
}
