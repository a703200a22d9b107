//! Business mode classification.
//!
//! The mode decides which prompt rules condition the generation request.
//! Classification is a pure function of the request input and the optional
//! explicit business type; the explicit signal always wins.

/// Classification bucket controlling which prompt rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    LocalBusiness,
    OnlineProduct,
    CreatorProduct,
    General,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::LocalBusiness => "local_business",
            Mode::OnlineProduct => "online_product",
            Mode::CreatorProduct => "creator_product",
            Mode::General => "general",
        }
    }
}

/// Short codes the frontend may send to pin the mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    Local,
    Product,
    Creator,
}

impl BusinessType {
    /// Unknown codes are ignored by the caller, falling back to keyword
    /// detection.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "local" => Some(Self::Local),
            "product" => Some(Self::Product),
            "creator" => Some(Self::Creator),
            _ => None,
        }
    }

    fn mode(self) -> Mode {
        match self {
            Self::Local => Mode::LocalBusiness,
            Self::Product => Mode::OnlineProduct,
            Self::Creator => Mode::CreatorProduct,
        }
    }
}

const LOCAL_BUSINESS_TERMS: &[&str] = &[
    "store", "shop", "local", "restaurant", "cafe", "gym", "salon", "clinic", "tahoe", "truckee",
    "brick", "mortar", "near me",
];

const CREATOR_PRODUCT_TERMS: &[&str] = &[
    "book",
    "author",
    "kdp",
    "amazon",
    "etsy",
    "course",
    "gumroad",
    "newsletter",
    "substack",
    "creator",
    "influencer",
];

const ONLINE_PRODUCT_TERMS: &[&str] = &[
    "saas",
    "app",
    "software",
    "ecommerce",
    "online store",
    "shopify",
    "product",
];

/// Keyword tables in priority order; the first table with a hit wins and no
/// cross-table scoring happens.
const KEYWORD_TABLES: &[(&[&str], Mode)] = &[
    (LOCAL_BUSINESS_TERMS, Mode::LocalBusiness),
    (CREATOR_PRODUCT_TERMS, Mode::CreatorProduct),
    (ONLINE_PRODUCT_TERMS, Mode::OnlineProduct),
];

/// Classifies a business description into a [`Mode`].
pub fn detect_mode(input: &str, business_type: Option<BusinessType>) -> Mode {
    // Explicit signal from the caller always wins
    if let Some(business_type) = business_type {
        return business_type.mode();
    }

    let text = input.to_lowercase();
    for (terms, mode) in KEYWORD_TABLES {
        if terms.iter().any(|term| text.contains(term)) {
            return *mode;
        }
    }

    Mode::General
}
