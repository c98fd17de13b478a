use crate::summary::Summary;
use csv::WriterBuilder;
use std::{fmt, io::Write};

const TOTAL_COLLECTION: &str = "TOTAL_COLLECTION";
const PASSENGER_TYPE_SUMMARY: &str = "PASSENGER_TYPE_SUMMARY";

/// Renders a summary as space separated lines, one block per station.
pub fn write_summary<W: Write>(summary: &Summary, writer: W) -> Result<(), std::io::Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .flexible(true)
        .from_writer(writer);

    let mut collected_buf = itoa::Buffer::new();
    let mut discount_buf = itoa::Buffer::new();
    let mut count_buf = itoa::Buffer::new();

    for station in &summary.stations {
        let name: &'static str = station.station.into();
        writer.write_record(&[
            TOTAL_COLLECTION.as_bytes(),
            name.as_bytes(),
            collected_buf.format(station.total_collected).as_bytes(),
            discount_buf.format(station.total_discount).as_bytes(),
        ])?;
        writer.write_record(&[PASSENGER_TYPE_SUMMARY.as_bytes()])?;

        for stats in &station.passenger_types {
            let passenger_type: &'static str = stats.passenger_type.into();
            writer.write_record(&[
                passenger_type.as_bytes(),
                count_buf.format(stats.count).as_bytes(),
            ])?;
        }
    }

    writer.flush()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        write_summary(self, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
