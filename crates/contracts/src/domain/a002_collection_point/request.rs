use serde::{Deserialize, Serialize};

/// Body of `POST points`
///
/// Built once at submit time from the page state and never stored.
/// `uf` and `city` are empty strings when nothing was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePointRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub lat: f64,
    pub long: f64,
    pub items: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let request = CreatePointRequest {
            name: "X".to_string(),
            email: "x@x.com".to_string(),
            whatsapp: "123".to_string(),
            uf: "SP".to_string(),
            city: "Campinas".to_string(),
            lat: -22.9,
            long: -47.0,
            items: vec![1, 2],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "X",
                "email": "x@x.com",
                "whatsapp": "123",
                "uf": "SP",
                "city": "Campinas",
                "lat": -22.9,
                "long": -47.0,
                "items": [1, 2]
            })
        );
    }
}
