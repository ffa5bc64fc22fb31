use crate::domain::model::{ConversionRates, SizeCategory, SizeProfile};

// 體型參數對應表
pub static SIZE_PROFILES: [SizeProfile; 3] = [
    SizeProfile {
        category: SizeCategory::Small,
        rates: ConversionRates::new(4.0, 3.5, 4.5),
        label: "小型犬（4–5）",
    },
    SizeProfile {
        category: SizeCategory::Medium,
        rates: ConversionRates::new(4.5, 4.0, 5.0),
        label: "中型犬（4.5–6）",
    },
    SizeProfile {
        category: SizeCategory::Large,
        rates: ConversionRates::new(5.5, 5.0, 6.0),
        label: "大型犬（5–7）",
    },
];

impl SizeCategory {
    pub fn profile(&self) -> &'static SizeProfile {
        match self {
            Self::Small => &SIZE_PROFILES[0],
            Self::Medium => &SIZE_PROFILES[1],
            Self::Large => &SIZE_PROFILES[2],
        }
    }
}
