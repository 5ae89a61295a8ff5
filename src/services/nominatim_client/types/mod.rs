pub mod nominatim_place;
