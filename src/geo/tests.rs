#[cfg(test)]
mod tests {
    use crate::geo::{DEFAULT_LOCATION, LocationContext};

    #[test]
    fn test_default_location() {
        assert_eq!(LocationContext::default().description(), "USA (Default)");
    }

    #[test]
    fn test_new_trims_free_text() {
        let location = LocationContext::new("  Berlin, Germany  ");
        assert_eq!(location.description(), "Berlin, Germany");
    }

    #[test]
    fn test_blank_text_degrades_to_default() {
        assert_eq!(LocationContext::new("   ").description(), DEFAULT_LOCATION);
        assert_eq!(LocationContext::new("").description(), DEFAULT_LOCATION);
    }

    #[test]
    fn test_coordinates_formatting() {
        let location = LocationContext::from_coordinates(52.5163, 13.3777);
        assert_eq!(location.description(), "Lat: 52.52, Lon: 13.38");
    }

    #[test]
    fn test_resolve_prefers_explicit_description() {
        let location = LocationContext::resolve(Some("Tokyo, Japan"), Some(35.68), Some(139.69));
        assert_eq!(location.description(), "Tokyo, Japan");
    }

    #[test]
    fn test_resolve_falls_back_to_coordinates() {
        let location = LocationContext::resolve(None, Some(35.68), Some(139.69));
        assert_eq!(location.description(), "Lat: 35.68, Lon: 139.69");
    }

    #[test]
    fn test_resolve_requires_both_coordinates() {
        let location = LocationContext::resolve(None, Some(35.68), None);
        assert_eq!(location.description(), DEFAULT_LOCATION);
    }

    #[test]
    fn test_units_instruction_embeds_location() {
        let instruction = LocationContext::new("Munich, Germany").units_instruction();
        assert!(instruction.contains("Munich, Germany"));
        assert!(instruction.contains("kW"));
    }
}
