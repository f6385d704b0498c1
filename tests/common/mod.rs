use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use dashboard_core::domain::{AdCost, Currency, Origin, Package, Sale};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap()
}

pub fn sale(day: NaiveDate, amount: f64, package: Package, origin: Origin) -> Sale {
    Sale {
        id: None,
        date: day,
        time: "10:30".into(),
        amount,
        package,
        origin,
        currency: Currency::Real,
        client_name: "Cliente".into(),
        timestamp: instant(),
    }
}

pub fn ad_cost(day: NaiveDate, amount: f64) -> AdCost {
    AdCost {
        id: None,
        date: day,
        amount,
        timestamp: instant(),
    }
}
