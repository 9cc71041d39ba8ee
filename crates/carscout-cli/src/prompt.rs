//! Interactive collection of search filters.
//!
//! Flags win; anything not given on the command line is asked for in the
//! same order the search form lists them.

use carscout_core::{parse_page_count, RawFilterInput, SearchFilter, DEFAULT_ZIP};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::FilterArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterField {
    PageCount,
    PriceMax,
    MileageMax,
    YearMin,
    YearMax,
    Zip,
    Brand,
    BodyStyle,
}

impl FilterField {
    fn prompt(self) -> String {
        match self {
            FilterField::PageCount => "Page number".to_string(),
            FilterField::PriceMax => "Maximum price".to_string(),
            FilterField::MileageMax => "Maximum mileage".to_string(),
            FilterField::YearMin => "Minimum year".to_string(),
            FilterField::YearMax => "Maximum year".to_string(),
            FilterField::Zip => format!("ZIP code (press Enter to use default '{DEFAULT_ZIP}')"),
            FilterField::Brand => "Brand (optional)".to_string(),
            FilterField::BodyStyle => "Body style (optional)".to_string(),
        }
    }
}

/// Source of answers for filters missing from the command line.
pub(crate) trait Prompter {
    fn ask(&mut self, field: FilterField) -> anyhow::Result<String>;
}

#[derive(Default)]
pub(crate) struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, field: FilterField) -> anyhow::Result<String> {
        let input = Input::<String>::with_theme(&self.theme).with_prompt(field.prompt());

        let answer = if field == FilterField::PageCount {
            input
                .validate_with(|raw: &String| -> Result<(), String> {
                    parse_page_count(raw).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()?
        } else {
            input.allow_empty(true).interact_text()?
        };

        Ok(answer)
    }
}

/// Used with `--no-prompt`: the page count is mandatory, every other filter
/// defaults to blank.
pub(crate) struct NonInteractive;

impl Prompter for NonInteractive {
    fn ask(&mut self, field: FilterField) -> anyhow::Result<String> {
        if field == FilterField::PageCount {
            anyhow::bail!("--pages is required when --no-prompt is set");
        }
        Ok(String::new())
    }
}

/// Merges flag values with prompted answers and validates the result.
///
/// # Errors
///
/// Returns an error if prompting fails or the page count is invalid.
pub(crate) fn collect_filter<P: Prompter>(
    args: &FilterArgs,
    prompter: &mut P,
) -> anyhow::Result<SearchFilter> {
    let mut resolve = |given: &Option<String>, field: FilterField| -> anyhow::Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None => prompter.ask(field),
        }
    };

    let raw = RawFilterInput {
        page_count: resolve(&args.pages, FilterField::PageCount)?,
        price_max: resolve(&args.price_max, FilterField::PriceMax)?,
        mileage_max: resolve(&args.mileage_max, FilterField::MileageMax)?,
        year_min: resolve(&args.year_min, FilterField::YearMin)?,
        year_max: resolve(&args.year_max, FilterField::YearMax)?,
        zip: resolve(&args.zip, FilterField::Zip)?,
        brand: resolve(&args.brand, FilterField::Brand)?,
        body_style: resolve(&args.body_style, FilterField::BodyStyle)?,
    };

    Ok(SearchFilter::from_raw(raw)?)
}

pub(crate) fn print_filter_summary(filter: &SearchFilter) {
    println!("\nEntered search parameters:");
    println!("Page number: {}", filter.page_count);
    println!("Maximum price: {}", filter.price_max);
    println!("Maximum mileage: {}", filter.mileage_max);
    println!("Minimum year: {}", filter.year_min);
    println!("Maximum year: {}", filter.year_max);
    println!("ZIP Code: {}", filter.zip);
    if let Some(brand) = &filter.brand {
        println!("Brand: {brand}");
    }
    if let Some(body_style) = &filter.body_style {
        println!("Body style: {body_style}");
    }
    println!();
}
