//! Static copy and mock data shown on the landing page.

use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;

pub const FEATURES_JSON: &str = include_str!("../assets/features.json");
pub const FAQ_JSON: &str = include_str!("../assets/faq.json");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("failed to parse {file}: {message}")]
    Parse { file: &'static str, message: String },
}

impl ContentError {
    fn parse(file: &'static str, err: serde_json::Error) -> Self {
        ContentError::Parse {
            file,
            message: err.to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureSlide<'a> {
    pub id: u32,
    #[serde(borrow)]
    pub title: Cow<'a, str>,
    #[serde(borrow)]
    pub description: Cow<'a, str>,
    #[serde(borrow)]
    pub bullet_points: Vec<Cow<'a, str>>,
    #[serde(borrow)]
    pub image: Cow<'a, str>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FaqIcon {
    Receipt,
    Calculator,
    CreditCard,
    FileText,
    Shield,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqItem<'a> {
    #[serde(borrow)]
    pub id: Cow<'a, str>,
    pub icon: FaqIcon,
    #[serde(borrow)]
    pub question: Cow<'a, str>,
    #[serde(borrow)]
    pub answer: Cow<'a, str>,
}

pub fn feature_slides() -> Result<Vec<FeatureSlide<'static>>, ContentError> {
    serde_json::from_str(FEATURES_JSON).map_err(|err| ContentError::parse("features.json", err))
}

pub fn faq_items() -> Result<Vec<FaqItem<'static>>, ContentError> {
    serde_json::from_str(FAQ_JSON).map_err(|err| ContentError::parse("faq.json", err))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivityRing {
    pub label: &'static str,
    pub value: f64,
    pub max: f64,
    pub color: &'static str,
    pub unit: &'static str,
}

impl ActivityRing {
    pub fn percentage(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.value / self.max * 100.0
    }
}

pub const DAILY_PERFORMANCE: [ActivityRing; 3] = [
    ActivityRing {
        label: "Appointments Completed",
        value: 28.0,
        max: 35.0,
        color: "#3b82f6",
        unit: "",
    },
    ActivityRing {
        label: "Patient Satisfaction",
        value: 94.0,
        max: 100.0,
        color: "#10b981",
        unit: "%",
    },
    ActivityRing {
        label: "Revenue Target",
        value: 12450.0,
        max: 15000.0,
        color: "#f59e0b",
        unit: "$",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Cancelled => "Cancelled",
            PaymentStatus::Refunded => "Ref",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub date: &'static str,
    pub status: PaymentStatus,
    pub name: &'static str,
    pub avatar: &'static str,
    pub revenue: &'static str,
}

pub const CUSTOMERS: [Customer; 4] = [
    Customer {
        id: 1,
        date: "10/31/2023",
        status: PaymentStatus::Paid,
        name: "Bernard Ng",
        avatar: "https://avatars.githubusercontent.com/u/31113941?v=4",
        revenue: "$43.99",
    },
    Customer {
        id: 2,
        date: "10/21/2023",
        status: PaymentStatus::Refunded,
        name: "Méschac Irung",
        avatar: "https://avatars.githubusercontent.com/u/47919550?v=4",
        revenue: "$19.99",
    },
    Customer {
        id: 3,
        date: "10/15/2023",
        status: PaymentStatus::Paid,
        name: "Glodie Ng",
        avatar: "https://avatars.githubusercontent.com/u/99137927?v=4",
        revenue: "$99.99",
    },
    Customer {
        id: 4,
        date: "10/12/2023",
        status: PaymentStatus::Cancelled,
        name: "Theo Ng",
        avatar: "https://avatars.githubusercontent.com/u/68236786?v=4",
        revenue: "$19.99",
    },
];

/// "Showing N row(s)" footer of the customers table.
pub fn row_summary(rows: usize) -> String {
    format!("Showing {} {}", rows, if rows == 1 { "row" } else { "rows" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_slides_parse() {
        let slides = feature_slides().unwrap();
        assert_eq!(slides.len(), 5);
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.id as usize, i + 1);
            assert_eq!(slide.bullet_points.len(), 4);
            assert_eq!(slide.image, format!("/images/feature-{}.jpg", i + 1));
        }
        assert_eq!(slides[3].title, "Telemedicine Platform");
    }

    #[test]
    fn test_faq_items_parse() {
        let items = faq_items().unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_ref()).collect();
        assert_eq!(ids, ["item-1", "item-2", "item-3", "item-4", "item-5"]);
        assert_eq!(items[2].icon, FaqIcon::CreditCard);
        assert_eq!(items[4].icon, FaqIcon::Shield);
    }

    #[test]
    fn test_bad_json_reports_file() {
        let err = serde_json::from_str::<Vec<FeatureSlide>>("[{\"id\": 1}]")
            .map_err(|err| ContentError::parse("features.json", err))
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to parse features.json"));
    }

    #[test]
    fn test_ring_percentage() {
        let rounded: Vec<String> = DAILY_PERFORMANCE
            .iter()
            .map(|r| format!("{:.0}", r.percentage()))
            .collect();
        assert_eq!(rounded, ["80", "94", "83"]);
    }

    #[test]
    fn test_row_summary() {
        assert_eq!(row_summary(1), "Showing 1 row");
        assert_eq!(row_summary(CUSTOMERS.len()), "Showing 4 rows");
    }
}
