//! Unit listing for populating the front-end selectors

use crate::core::features::unit_tables::{Unit, UnitInfo};
use crate::shared::types::{GetUnitsResponse, UnitDTO, UnitDomain};

fn to_dto(unit: Unit) -> UnitDTO {
    UnitDTO {
        id: unit.key().to_string(),
        label: unit.label().to_string(),
        name: unit.name().to_string(),
        domain: unit.domain(),
    }
}

/// All units, grouped by domain in table order
pub fn get_all_units_command() -> GetUnitsResponse {
    GetUnitsResponse {
        units: Unit::all().into_iter().map(to_dto).collect(),
    }
}

pub fn get_units_for_domain(domain: UnitDomain) -> Vec<UnitDTO> {
    Unit::all()
        .into_iter()
        .filter(|unit| unit.domain() == domain)
        .map(to_dto)
        .collect()
}
