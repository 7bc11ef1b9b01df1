//! demos/rainfall_chart.rs
//!
//! Builds the daily rainfall climatology of a station dataset and draws the mean
//! rainfall of every calendar day as bars, one colour per month, with `plotlars`.
//!
//! To run this demo:
//! cargo run --example rainfall_chart --features examples -- dataset/P1PRUZ01.csv

use std::env;
use std::error::Error;
use std::path::PathBuf;

use plotlars::{Axis, BarPlot, Legend, Plot, Rgb, Text};
use polars::prelude::*;
use rainfall_normals::Climatology;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seven steps from the middle of the viridis gradient.
const GRADIENT: [Rgb; 7] = [
    Rgb(34, 139, 141),
    Rgb(31, 150, 139),
    Rgb(31, 160, 136),
    Rgb(36, 170, 131),
    Rgb(46, 179, 124),
    Rgb(58, 186, 118),
    Rgb(76, 194, 108),
];

/// Twelve month colours: the gradient mirrored, lightest in January, darkest in July.
fn month_palette() -> Vec<Rgb> {
    let mut palette: Vec<Rgb> = GRADIENT[1..].iter().rev().cloned().collect();
    palette.extend_from_slice(&GRADIENT[..GRADIENT.len() - 1]);
    palette
}

/// Group label of a month; the numeric prefix keeps the groups in calendar order.
fn month_label(month: u32) -> String {
    let name = MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    format!("{month:02} {name}")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let path: PathBuf = env::args()
        .nth(1)
        .unwrap_or_else(|| "dataset/P1PRUZ01.csv".to_string())
        .into();

    println!("Reading {:?}...", path);
    let climatology = Climatology::from_path().path(&path).call().await?;

    let today = climatology.today()?;
    let (_, statistic) = climatology.locate(chrono::Local::now().date_naive())?;
    let caption = format!(
        "Today ({:02}-{:02}): {:.2} mm on average, rain in {:.0}% of the years",
        statistic.month,
        statistic.day,
        today.mean_rainfall,
        statistic.rain_probability * 100.0
    );
    println!("{caption}");

    let mut data = climatology.to_frame()?;
    let month_labels: Vec<String> = data
        .column("month")?
        .u32()?
        .into_iter()
        .map(|month| month_label(month.unwrap_or(0)))
        .collect();
    data.with_column(Series::new("month_name".into(), month_labels))?;

    plot_climatology(&data, month_palette(), &caption);
    println!("Plot shown in browser.");
    Ok(())
}

/// One bar per calendar day (`date` against `mean_rainfall`), grouped and coloured by
/// month.
fn plot_climatology(data: &DataFrame, palette: Vec<Rgb>, caption: &str) {
    BarPlot::builder()
        .data(data)
        .labels("date")
        .values("mean_rainfall")
        .group("month_name")
        .colors(palette)
        .plot_title(Text::from("Average daily rainfall").font("Arial").size(18))
        .x_title(Text::from(caption))
        .y_title(Text::from("mean rainfall [mm]").color(Rgb(0, 0, 0)))
        .legend(&Legend::new().x(1.0).y(0.9))
        .y_axis(
            &Axis::new()
                .value_color(Rgb(0, 0, 0))
                .show_grid(false)
                .zero_line_color(Rgb(0, 0, 0)),
        )
        .build()
        .plot();
}
