use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rainfall_normals::{CalendarIndex, Climatology, RecordIngestor};

const MONTH_LENGTHS: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sixty years of rows in the station file layout, with the 31-column padding of short
/// months left empty and a missing reading every so often.
fn synthetic_dataset() -> String {
    let mut text = String::from("station\nperiod\nunit\nyear,month,1..31\n");
    for year in 1961..2021 {
        let leap = year % 4 == 0;
        for (index, length) in MONTH_LENGTHS.iter().enumerate() {
            let month = index + 1;
            let length = if month == 2 && leap { 29 } else { *length };
            text.push_str(&format!("{year},{month}"));
            for day in 1..=31 {
                text.push(',');
                if day <= length && (year + day) % 17 != 0 {
                    let amount = ((year * 31 + day * 7) % 23) as f64 / 4.0;
                    text.push_str(&format!("{amount:.1}"));
                }
            }
            text.push('\n');
        }
    }
    text
}

fn bench_climatology(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    c.bench_function("climatology_from_text", |b| {
        b.iter(|| Climatology::from_text().text(black_box(&dataset)).call())
    });

    let ingestor = RecordIngestor::default();
    let row = "1961,1,0.0,1.2,,3.4,0.0,0.0,5.6,0.1,,,2.2,0.0,0.0,0.0,0.4,0.5,0.0,0.0,0.0,1.1,,0.0,0.0,0.0,0.2,0.0,0.0,0.0,0.3";
    c.bench_function("ingest_row", |b| b.iter(|| ingestor.parse(black_box(row))));

    c.bench_function("calendar_build", |b| {
        b.iter(|| CalendarIndex::build(black_box(2000)))
    });
}

criterion_group!(benches, bench_climatology);
criterion_main!(benches);
