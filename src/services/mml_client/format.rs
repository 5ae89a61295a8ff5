//! Normalization of the four MML property shapes into [`MmlProperties`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::types::{
    mml_properties::MmlProperties,
    mml_search_response::{
        MmlAddressProperties, MmlCadastralUnitProperties, MmlGeographicNameProperties,
        MmlPlaceName,
    },
    mml_source::MmlSource,
};
use crate::services::geocoding_error::GeocodingError;

pub fn format_properties(
    source: MmlSource,
    properties: &Value,
) -> Result<MmlProperties, GeocodingError> {
    match source {
        MmlSource::Addresses => Ok(format_addresses(parse(source, properties)?)),
        MmlSource::GeographicNames => format_geographic_names(parse(source, properties)?),
        MmlSource::InterpolatedRoadAddresses => {
            Ok(format_interpolated_road_addresses(parse(source, properties)?))
        }
        MmlSource::CadastralUnits => Ok(format_cadastral_units(parse(source, properties)?)),
    }
}

fn parse<T: DeserializeOwned>(source: MmlSource, properties: &Value) -> Result<T, GeocodingError> {
    T::deserialize(properties).map_err(|e| {
        GeocodingError::MalformedResponse(format!("Invalid {} properties: {}", source, e))
    })
}

/// Street name and building number joined by a space, skipping whichever is absent.
fn street_name(street: Option<&str>, number: Option<&str>) -> String {
    [street, number]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_addresses(p: MmlAddressProperties) -> MmlProperties {
    MmlProperties {
        name: street_name(p.katunimi.as_deref(), p.katunumero.as_deref()),
        postal_code: p.postinumero,
        country: p.country,
        region: None,
        municipality: p.label_municipality,
        continent: p.continent,
    }
}

fn format_geographic_names(
    p: MmlGeographicNameProperties,
) -> Result<MmlProperties, GeocodingError> {
    let name = newest_name(p.name).ok_or(GeocodingError::MissingPlaceName)?;

    Ok(MmlProperties {
        name: name.spelling,
        postal_code: None,
        country: p.country,
        region: p.label_region,
        municipality: p.label_municipality,
        continent: p.continent,
    })
}

fn format_interpolated_road_addresses(p: MmlAddressProperties) -> MmlProperties {
    MmlProperties {
        name: street_name(p.katunimi.as_deref(), p.katunumero.as_deref()),
        postal_code: None,
        country: p.country,
        region: None,
        municipality: p.label_municipality,
        continent: p.continent,
    }
}

fn format_cadastral_units(p: MmlCadastralUnitProperties) -> MmlProperties {
    MmlProperties {
        name: p.label.unwrap_or_default(),
        postal_code: None,
        country: p.country,
        region: p.label_municipality,
        municipality: None,
        continent: p.continent,
    }
}

/// Picks the most recently created name. Unparseable timestamps lose to any parseable
/// one, and on ties the earliest record wins.
fn newest_name(names: Vec<MmlPlaceName>) -> Option<MmlPlaceName> {
    let mut newest: Option<(Option<DateTime<Utc>>, MmlPlaceName)> = None;

    for name in names {
        let created = name.placeNameCreationTime.as_deref().and_then(parse_timestamp);
        match &newest {
            Some((best, _)) if created <= *best => {}
            _ => newest = Some((created, name)),
        }
    }

    newest.map(|(_, name)| name)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
