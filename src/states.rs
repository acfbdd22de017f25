//! Federative unit display names
//!
//! Static label table for the 27 Brazilian federative units. Aggregations
//! keep the raw 2-letter codes; this mapping is applied at render time so
//! it can be swapped without touching the aggregation layer.

/// Display name for a federative unit code, in the dashboard's
/// "(CODE) Name" form
pub fn state_display_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "SP" => "(SP) São Paulo",
        "RJ" => "(RJ) Rio de Janeiro",
        "MG" => "(MG) Minas Gerais",
        "RS" => "(RS) Rio Grande do Sul",
        "PR" => "(PR) Paraná",
        "SC" => "(SC) Santa Catarina",
        "BA" => "(BA) Bahia",
        "DF" => "(DF) Distrito Federal",
        "ES" => "(ES) Espírito Santo",
        "GO" => "(GO) Goiás",
        "PE" => "(PE) Pernambuco",
        "CE" => "(CE) Ceará",
        "PA" => "(PA) Pará",
        "MT" => "(MT) Mato Grosso",
        "MA" => "(MA) Maranhão",
        "MS" => "(MS) Mato Grosso do Sul",
        "PB" => "(PB) Paraíba",
        "PI" => "(PI) Piauí",
        "RN" => "(RN) Rio Grande do Norte",
        "AL" => "(AL) Alagoas",
        "SE" => "(SE) Sergipe",
        "TO" => "(TO) Tocantins",
        "RO" => "(RO) Rondônia",
        "AM" => "(AM) Amazonas",
        "AC" => "(AC) Acre",
        "AP" => "(AP) Amapá",
        "RR" => "(RR) Roraima",
        _ => return None,
    };
    Some(name)
}
