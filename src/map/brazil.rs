//! Built-in map: 26 Brazilian federative units.
//!
//! Neighbor lists are taken as published for the board; a few are not
//! symmetric (Mato Grosso lists Amazonas, Amazonas does not list Mato
//! Grosso).

use crate::core::RegionGroup::{CenterWest, North, Northeast, South, Southeast};

use super::graph::Region;

/// The region table.
#[must_use]
pub fn regions() -> Vec<Region> {
    vec![
        Region::new("AM", North, "Amazonas", &["PA", "RO", "RR"]),
        Region::new("PA", North, "Pará", &["AM", "MA", "TO"]),
        Region::new("MA", Northeast, "Maranhão", &["PA", "PI", "TO"]),
        Region::new("PI", Northeast, "Piauí", &["MA", "CE", "PE"]),
        Region::new("CE", Northeast, "Ceará", &["PI", "RN", "PB"]),
        Region::new("RN", Northeast, "Rio Grande do Norte", &["CE", "PB"]),
        Region::new("PB", Northeast, "Paraíba", &["CE", "RN", "PE"]),
        Region::new("PE", Northeast, "Pernambuco", &["PI", "PB", "AL", "BA"]),
        Region::new("AL", Northeast, "Alagoas", &["PE", "SE"]),
        Region::new("SE", Northeast, "Sergipe", &["AL", "BA"]),
        Region::new("BA", Northeast, "Bahia", &["PE", "SE", "MG", "GO", "TO"]),
        Region::new("TO", North, "Tocantins", &["PA", "MA", "BA", "GO", "MT"]),
        Region::new("MT", CenterWest, "Mato Grosso", &["RO", "AM", "PA", "TO", "GO", "MS"]),
        Region::new("GO", CenterWest, "Goiás", &["DF", "MT", "TO", "BA", "MG", "MS"]),
        Region::new("DF", CenterWest, "Distrito Federal", &["GO"]),
        Region::new("MS", CenterWest, "Mato Grosso do Sul", &["MT", "GO", "MG", "PR"]),
        Region::new("MG", Southeast, "Minas Gerais", &["BA", "GO", "MS", "SP", "RJ", "ES"]),
        Region::new("ES", Southeast, "Espírito Santo", &["MG", "RJ"]),
        Region::new("RJ", Southeast, "Rio de Janeiro", &["MG", "ES", "SP"]),
        Region::new("SP", Southeast, "São Paulo", &["MG", "RJ", "PR", "MS"]),
        Region::new("PR", South, "Paraná", &["MS", "SP", "SC"]),
        Region::new("SC", South, "Santa Catarina", &["PR", "RS"]),
        Region::new("RS", South, "Rio Grande do Sul", &["SC"]),
        Region::new("RO", North, "Rondônia", &["AM", "MT", "AC"]),
        Region::new("RR", North, "Roraima", &["AM"]),
        Region::new("AC", North, "Acre", &["RO", "AM"]),
    ]
}
