use chrono::{DateTime, NaiveDateTime, Utc};

pub fn date_time_from_timestamp_sec(timestamp_sec: u64) -> DateTime<Utc> {
    let naive = NaiveDateTime::from_timestamp(timestamp_sec as i64, 0);

    DateTime::from_utc(naive, Utc)
}

pub fn date_time_from_timestamp_millis(timestamp_millis: u64) -> DateTime<Utc> {
    date_time_from_timestamp_sec(timestamp_millis / 1000)
}
