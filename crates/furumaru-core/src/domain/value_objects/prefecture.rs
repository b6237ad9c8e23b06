//! Japanese prefecture value object.

use serde::{Deserialize, Serialize};
use std::fmt;

const NAMES: [&str; 47] = [
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// A prefecture identified by its JIS X 0401 code (1 = Hokkaido, 47 = Okinawa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Prefecture(i32);

impl Prefecture {
    /// Lowest valid code.
    pub const MIN_CODE: i32 = 1;
    /// Highest valid code.
    pub const MAX_CODE: i32 = 47;

    /// Returns the prefecture for a code, or `None` when out of range.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        if code >= Self::MIN_CODE && code <= Self::MAX_CODE {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Returns the JIS code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.0
    }

    /// Returns the Japanese name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        NAMES[(self.0 - Self::MIN_CODE) as usize]
    }

    /// Returns the name for a raw code, empty when the code is unknown.
    #[must_use]
    pub fn name_of(code: i32) -> String {
        Self::from_code(code)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }
}

impl TryFrom<i32> for Prefecture {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown prefecture code: {}", code))
    }
}

impl From<Prefecture> for i32 {
    fn from(prefecture: Prefecture) -> Self {
        prefecture.0
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
