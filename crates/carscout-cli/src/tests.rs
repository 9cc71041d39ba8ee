use super::*;

#[test]
fn no_args_leaves_every_filter_unset() {
    let cli = Cli::try_parse_from(["carscout"]).expect("expected valid cli args");
    assert!(cli.filters.pages.is_none());
    assert!(cli.filters.zip.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.no_export);
    assert!(!cli.no_prompt);
    assert!(cli.exclude.is_empty());
}

#[test]
fn parses_all_filter_flags() {
    let cli = Cli::try_parse_from([
        "carscout",
        "--pages",
        "3",
        "--price-max",
        "18000",
        "--mileage-max",
        "75000",
        "--year-min",
        "2015",
        "--year-max",
        "2020",
        "--zip",
        "60601",
        "--brand",
        "honda",
        "--body-style",
        "sedan",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.filters.pages.as_deref(), Some("3"));
    assert_eq!(cli.filters.price_max.as_deref(), Some("18000"));
    assert_eq!(cli.filters.mileage_max.as_deref(), Some("75000"));
    assert_eq!(cli.filters.year_min.as_deref(), Some("2015"));
    assert_eq!(cli.filters.year_max.as_deref(), Some("2020"));
    assert_eq!(cli.filters.zip.as_deref(), Some("60601"));
    assert_eq!(cli.filters.brand.as_deref(), Some("honda"));
    assert_eq!(cli.filters.body_style.as_deref(), Some("sedan"));
}

#[test]
fn parses_output_path() {
    let cli = Cli::try_parse_from(["carscout", "-o", "cars.csv"]).unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("cars.csv")));
}

#[test]
fn exclude_accepts_repeats_and_commas() {
    let cli = Cli::try_parse_from([
        "carscout",
        "--exclude",
        "vin,dealer_phone",
        "--exclude",
        "carfax_url",
    ])
    .unwrap();
    assert_eq!(cli.exclude, vec!["vin", "dealer_phone", "carfax_url"]);
}

#[test]
fn no_export_conflicts_with_output() {
    let result = Cli::try_parse_from(["carscout", "--no-export", "--output", "x.csv"]);
    assert!(result.is_err());
}

#[test]
fn parses_no_prompt_flag() {
    let cli = Cli::try_parse_from(["carscout", "--no-prompt", "--pages", "1"]).unwrap();
    assert!(cli.no_prompt);
}
