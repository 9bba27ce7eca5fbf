#[cfg(test)]
mod tests {
    use crate::comparison::enrichment::EnrichmentResolver;
    use crate::comparison::merge::merge_enrichment;
    use crate::comparison::types::{
        ComparisonResult, FinancialInfo, Listing, VehicleData, VehicleEnrichment, VehicleSpecs,
    };
    use crate::config::Config;
    use crate::outlet::{render_markdown, save};
    use tempfile::TempDir;

    fn baseline_result() -> ComparisonResult {
        let specs = VehicleSpecs {
            engine: "2.0L flat-4".to_string(),
            horsepower: "228 hp".to_string(),
            torque: "184 lb-ft".to_string(),
            transmission: "6-speed manual".to_string(),
            drivetrain: "RWD".to_string(),
            zero_to_sixty: "6.1 s".to_string(),
            mpg: "20/27 mpg".to_string(),
            weight: "2,811 lbs".to_string(),
            dimensions: "167.9 x 69.9 x 51.6 in".to_string(),
            cargo_space: "6.3 cu ft".to_string(),
        };
        let vehicle = |name: &str| VehicleData {
            name: name.to_string(),
            specs: specs.clone(),
            pros: vec!["Sharp handling".to_string()],
            cons: vec!["Small trunk".to_string()],
            image_url: None,
            market: None,
            financials: None,
            ratings: None,
            news_headlines: None,
        };
        ComparisonResult {
            vehicle_a: vehicle("Toyota GR86"),
            vehicle_b: vehicle("Mazda MX-5"),
            verdict: "Pick the GR86 for seats, the MX-5 for sunshine.".to_string(),
        }
    }

    #[test]
    fn test_render_contains_core_sections() {
        let report = render_markdown(&baseline_result());

        assert!(report.contains("# Side-by-Side Comparison: Toyota GR86 vs. Mazda MX-5"));
        assert!(report.contains("**Expert Verdict:** Pick the GR86"));
        assert!(report.contains("| Engine | 2.0L flat-4 | 2.0L flat-4 |"));
        assert!(report.contains("Sharp handling"));
        assert!(report.contains("may contain errors"));
    }

    #[test]
    fn test_render_marks_pending_enrichment_fields() {
        let report = render_markdown(&baseline_result());

        // 第二阶段未完成时的等待标记
        assert!(report.contains("Analyzing..."));
        assert!(report.contains("Scanning dealer networks..."));
        assert!(!report.contains("## Images"));
        assert!(!report.contains("## In the News"));
    }

    #[test]
    fn test_render_listings_with_best_deal_marker() {
        let mut result = baseline_result();
        result.vehicle_a.financials = Some(FinancialInfo {
            estimated_insurance_cost: "$140/mo".to_string(),
            typical_bank_rate: "6.2%".to_string(),
            monthly_payment_estimate: "$510".to_string(),
            listings_sample: vec![
                Listing {
                    title: "2023 GR86 Premium".to_string(),
                    price: "$29,800".to_string(),
                    source: "Cars.com".to_string(),
                    url: Some("https://cars.example/gr86".to_string()),
                    is_best_deal: Some(true),
                },
                Listing {
                    title: "2022 GR86 Base".to_string(),
                    price: "$27,500".to_string(),
                    source: "AutoTrader".to_string(),
                    url: None,
                    is_best_deal: None,
                },
            ],
        });

        let report = render_markdown(&result);

        assert!(report.contains("[2023 GR86 Premium](https://cars.example/gr86) **BEST DEAL**"));
        assert!(report.contains("- 2022 GR86 Base — $27,500 _via AutoTrader_"));
    }

    #[test]
    fn test_render_placeholder_result_shows_sentinels() {
        let mut result = baseline_result();
        EnrichmentResolver::apply_placeholders(&mut result);

        let report = render_markdown(&result);

        assert!(report.contains("Data unavailable"));
        assert!(report.contains("No active listings found."));
        assert!(!report.contains("Analyzing..."));
    }

    #[test]
    fn test_render_image_section_when_present() {
        let mut result = baseline_result();
        merge_enrichment(
            &mut result.vehicle_b,
            VehicleEnrichment {
                image_url: Some("https://example.com/mx5.jpg".to_string()),
                ..Default::default()
            },
        );

        let report = render_markdown(&result);

        assert!(report.contains("## Images"));
        assert!(report.contains("![Mazda MX-5](https://example.com/mx5.jpg)"));
    }

    #[test]
    fn test_save_writes_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.output_path = temp_dir.path().join("reports").join("comparison.md");

        let path = save(&config, &baseline_result()).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Toyota GR86"));
    }
}
