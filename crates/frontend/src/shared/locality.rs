//! Client of the government locality service (states and cities).

use super::api_utils::{join_url, read_json};
use super::config::config;
use super::error::ApiError;
use contracts::shared::locality::{CityResponse, UfResponse};
use gloo_net::http::Request;

fn states_url(base: &str) -> String {
    join_url(base, "estados")
}

fn cities_url(base: &str, uf: &str) -> String {
    join_url(
        base,
        &format!("estados/{}/municipios", urlencoding::encode(uf)),
    )
}

/// Fetch the two-letter codes of all states, in service order
pub async fn fetch_ufs() -> Result<Vec<String>, ApiError> {
    let url = states_url(&config().locality.base_url);
    let response = Request::get(&url).send().await?;
    let data: Vec<UfResponse> = read_json(response).await?;

    Ok(data.into_iter().map(|uf| uf.sigla).collect())
}

/// Fetch the city names of one state
pub async fn fetch_cities(uf: &str) -> Result<Vec<String>, ApiError> {
    let url = cities_url(&config().locality.base_url, uf);
    let response = Request::get(&url).send().await?;
    let data: Vec<CityResponse> = read_json(response).await?;

    Ok(data.into_iter().map(|city| city.nome).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

    #[test]
    fn test_states_url() {
        assert_eq!(
            states_url(BASE),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
    }

    #[test]
    fn test_cities_url() {
        assert_eq!(
            cities_url(BASE, "SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }

    #[test]
    fn test_cities_url_encodes_segment() {
        assert_eq!(
            cities_url(BASE, "S/P"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/S%2FP/municipios"
        );
    }
}
