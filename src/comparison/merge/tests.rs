#[cfg(test)]
mod tests {
    use crate::comparison::merge::merge_enrichment;
    use crate::comparison::types::{
        FinancialInfo, Listing, MarketData, NewsHeadline, RatingInfo, VehicleData,
        VehicleEnrichment, VehicleSpecs,
    };

    fn baseline_vehicle() -> VehicleData {
        VehicleData {
            name: "Toyota Camry".to_string(),
            specs: VehicleSpecs {
                engine: "2.5L I4".to_string(),
                horsepower: "203 hp".to_string(),
                torque: "184 lb-ft".to_string(),
                transmission: "8-speed automatic".to_string(),
                drivetrain: "FWD".to_string(),
                zero_to_sixty: "7.6 s".to_string(),
                mpg: "28/39 mpg".to_string(),
                weight: "3,310 lbs".to_string(),
                dimensions: "192.1 x 72.4 x 56.9 in".to_string(),
                cargo_space: "15.1 cu ft".to_string(),
            },
            pros: vec!["Reliability".to_string()],
            cons: vec!["Bland styling".to_string()],
            image_url: None,
            market: None,
            financials: None,
            ratings: None,
            news_headlines: None,
        }
    }

    fn sample_market() -> MarketData {
        MarketData {
            resale_value_prediction: "Retains 60% after 3 years".to_string(),
            market_sentiment: "High demand".to_string(),
            target_audience: "Commuters".to_string(),
            average_price_used: "$22,000".to_string(),
            average_price_new: "$28,400".to_string(),
        }
    }

    #[test]
    fn test_present_fields_overwrite() {
        let mut vehicle = baseline_vehicle();
        let enrichment = VehicleEnrichment {
            image_url: Some("https://example.com/camry.jpg".to_string()),
            market: Some(sample_market()),
            ..Default::default()
        };

        merge_enrichment(&mut vehicle, enrichment);

        assert_eq!(
            vehicle.image_url.as_deref(),
            Some("https://example.com/camry.jpg")
        );
        assert_eq!(
            vehicle.market.as_ref().unwrap().market_sentiment,
            "High demand"
        );
    }

    #[test]
    fn test_absent_fields_left_untouched() {
        let mut vehicle = baseline_vehicle();
        vehicle.market = Some(sample_market());
        let before = vehicle.clone();

        merge_enrichment(&mut vehicle, VehicleEnrichment::default());

        assert_eq!(vehicle, before);
    }

    #[test]
    fn test_baseline_fields_never_touched() {
        let mut vehicle = baseline_vehicle();
        let enrichment = VehicleEnrichment {
            market: Some(sample_market()),
            ..Default::default()
        };

        merge_enrichment(&mut vehicle, enrichment);

        assert_eq!(vehicle.name, "Toyota Camry");
        assert_eq!(vehicle.specs.engine, "2.5L I4");
        assert_eq!(vehicle.pros, vec!["Reliability".to_string()]);
        assert_eq!(vehicle.cons, vec!["Bland styling".to_string()]);
    }

    #[test]
    fn test_resent_name_is_not_applied() {
        let mut vehicle = baseline_vehicle();
        let enrichment = VehicleEnrichment {
            name: Some("Toyota Camry XSE".to_string()),
            ..Default::default()
        };

        merge_enrichment(&mut vehicle, enrichment);

        assert_eq!(vehicle.name, "Toyota Camry");
    }

    #[test]
    fn test_arrays_replaced_wholesale() {
        let mut vehicle = baseline_vehicle();
        vehicle.financials = Some(FinancialInfo {
            estimated_insurance_cost: "$120/mo".to_string(),
            typical_bank_rate: "6.0%".to_string(),
            monthly_payment_estimate: "$450".to_string(),
            listings_sample: vec![Listing {
                title: "Old listing".to_string(),
                price: "$20,000".to_string(),
                source: "AutoTrader".to_string(),
                url: None,
                is_best_deal: None,
            }],
        });
        vehicle.news_headlines = Some(vec![NewsHeadline {
            title: "Old headline".to_string(),
            snippet: "…".to_string(),
            source: "MotorWeek".to_string(),
        }]);

        let enrichment = VehicleEnrichment {
            financials: Some(FinancialInfo {
                estimated_insurance_cost: "$130/mo".to_string(),
                typical_bank_rate: "5.5%".to_string(),
                monthly_payment_estimate: "$430".to_string(),
                listings_sample: vec![Listing {
                    title: "New listing".to_string(),
                    price: "$21,500".to_string(),
                    source: "Cars.com".to_string(),
                    url: Some("https://cars.example/1".to_string()),
                    is_best_deal: Some(true),
                }],
            }),
            news_headlines: Some(Vec::new()),
            ..Default::default()
        };

        merge_enrichment(&mut vehicle, enrichment);

        let listings = &vehicle.financials.as_ref().unwrap().listings_sample;
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "New listing");
        assert!(vehicle.news_headlines.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let enrichment = VehicleEnrichment {
            image_url: Some("https://example.com/camry.jpg".to_string()),
            market: Some(sample_market()),
            ratings: Some(RatingInfo {
                safety_rating: "5-star NHTSA".to_string(),
                reliability_score: "85/100".to_string(),
            }),
            ..Default::default()
        };

        let mut once = baseline_vehicle();
        merge_enrichment(&mut once, enrichment.clone());

        let mut twice = baseline_vehicle();
        merge_enrichment(&mut twice, enrichment.clone());
        merge_enrichment(&mut twice, enrichment);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_placeholder_fills_every_descriptive_field() {
        let mut vehicle = baseline_vehicle();

        merge_enrichment(&mut vehicle, VehicleEnrichment::placeholder());

        let market = vehicle.market.as_ref().unwrap();
        assert!(!market.resale_value_prediction.is_empty());
        assert!(!market.market_sentiment.is_empty());
        assert!(!market.target_audience.is_empty());
        assert!(!market.average_price_used.is_empty());
        assert!(!market.average_price_new.is_empty());

        let ratings = vehicle.ratings.as_ref().unwrap();
        assert!(!ratings.safety_rating.is_empty());
        assert!(!ratings.reliability_score.is_empty());

        let financials = vehicle.financials.as_ref().unwrap();
        assert!(!financials.estimated_insurance_cost.is_empty());
        assert!(!financials.typical_bank_rate.is_empty());
        assert!(!financials.monthly_payment_estimate.is_empty());
        assert!(financials.listings_sample.is_empty());

        assert!(vehicle.news_headlines.as_ref().unwrap().is_empty());
    }
}
