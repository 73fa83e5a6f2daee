use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use sleep_extract::config::INPUT_FILE;

const STAGES: [&str; 5] = [
    "HKCategoryValueSleepAnalysisInBed",
    "HKCategoryValueSleepAnalysisAsleepCore",
    "HKCategoryValueSleepAnalysisAsleepDeep",
    "HKCategoryValueSleepAnalysisAsleepREM",
    "HKCategoryValueSleepAnalysisAwake",
];

/// Deterministic splitmix64 so the sample is the same on every run.
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Older exports use the spaced layout, newer ones ISO-8601.
fn format_apple(dt: &DateTime<FixedOffset>, iso: bool) -> String {
    if iso {
        dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S %z").to_string()
    }
}

fn record(xml: &mut String, kind: &str, start: &str, end: &str, value: &str) -> Result<()> {
    writeln!(
        xml,
        r#"  <Record type="{kind}" sourceName="Sample Watch" startDate="{start}" endDate="{end}" value="{value}"/>"#
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let output_path = Path::new(INPUT_FILE);
    if output_path.exists() {
        bail!("{INPUT_FILE} already exists; refusing to overwrite it");
    }

    let mut rng = SplitMix(42);
    let tz = FixedOffset::west_opt(8 * 3600).context("invalid offset")?;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE HealthData [\n<!ELEMENT HealthData (Record*)>\n]>\n\
         <HealthData locale=\"en_US\">\n",
    );

    let mut sleep_count = 0;
    for night in 0..14 {
        let bedtime = tz
            .with_ymd_and_hms(2023, 1, 1, 22, 0, 0)
            .single()
            .context("invalid bedtime")?
            + Duration::days(night)
            + Duration::minutes(rng.below(90) as i64);

        let mut cursor = bedtime;
        for _ in 0..(4 + rng.below(4)) {
            let stage = STAGES[rng.below(STAGES.len() as u64) as usize];
            let end = cursor + Duration::seconds(600 + rng.below(5400) as i64);
            let iso = night % 2 == 1;
            record(
                &mut xml,
                "HKCategoryTypeIdentifierSleepAnalysis",
                &format_apple(&cursor, iso),
                &format_apple(&end, iso),
                stage,
            )?;
            sleep_count += 1;
            cursor = end;
        }

        let steps = 200 + rng.below(3000);
        record(
            &mut xml,
            "HKQuantityTypeIdentifierStepCount",
            &format_apple(&(cursor + Duration::hours(1)), false),
            &format_apple(&(cursor + Duration::hours(2)), false),
            &steps.to_string(),
        )?;
    }

    // One unreadable record so the skip path shows up in the summary.
    record(
        &mut xml,
        "HKCategoryTypeIdentifierSleepAnalysis",
        "yesterday-ish",
        "2023-01-15 07:00:00 -0800",
        STAGES[0],
    )?;
    sleep_count += 1;

    xml.push_str("</HealthData>\n");

    std::fs::write(output_path, xml)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Wrote {sleep_count} sleep records (1 malformed) to {INPUT_FILE}");
    Ok(())
}
