//! Service catalog behind the booking form's service picker.
//!
//! The table is fixed for the session. Choosing a category repopulates the
//! `#specificService` select with a placeholder followed by that
//! category's services, in the order listed here.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the page waits after repopulating before applying a deep link.
pub const DEEP_LINK_DELAY: Duration = Duration::from_millis(100);

/// Query parameter that deep-links into a course.
pub const COURSE_PARAM: &str = "course";

/// One `<option>` of the service select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    /// Submitted value.
    pub value: &'static str,
    /// Visible label, price included.
    pub label: &'static str,
}

/// First option of every repopulated select.
pub const PLACEHOLDER: ServiceOption = ServiceOption {
    value: "",
    label: "Select a service",
};

const fn opt(value: &'static str, label: &'static str) -> ServiceOption {
    ServiceOption { value, label }
}

const LASHES: &[ServiceOption] = &[
    opt("classic-lashes", "Classic Lashes - $150"),
    opt("volume-lashes", "Volume Lashes - $200"),
    opt("mega-volume", "Mega Volume Lashes - $250"),
    opt("lash-fill", "Lash Fill - $65+"),
];

const BROWS: &[ServiceOption] = &[
    opt("microblading", "Microblading - $400"),
    opt("powder-brows", "Powder Brows - $450"),
    opt("combo-brows", "Combination Brows - $500"),
    opt("brow-touchup", "Brow Touch-up - $100+"),
];

const LIPS: &[ServiceOption] = &[
    opt("lip-blush", "Lip Blush - $450"),
    opt("lip-neutralization", "Lip Neutralization - $400"),
    opt("lip-touchup", "Lip Touch-up - $125"),
];

const SPA: &[ServiceOption] = &[
    opt("facial", "Facial Treatment - $85"),
    opt("massage", "Relaxation Massage - $95"),
    opt("lash-tint", "Lash & Brow Tinting - $35"),
    opt("brow-lamination", "Brow Lamination - $75"),
];

const COURSES: &[ServiceOption] = &[
    opt("lash-certification", "2-Day Lash Certification - $1,200"),
    opt("classic-lash-course", "Classic Lash Fundamentals - $800"),
    opt("volume-lash-course", "Volume Lash Masterclass - $600"),
    opt("microblading-course", "Microblading Certification - $2,500"),
    opt("powder-brows-course", "Powder Brows Training - $2,200"),
    opt("lip-blush-course", "Lip Blush Certification - $2,000"),
];

const CONSULTATION: &[ServiceOption] = &[opt("free-consultation", "Free Consultation - 30 min")];

/// Service category, keyed by the `serviceCategory` radio values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Lashes,
    Brows,
    Lips,
    Spa,
    Course,
    Consultation,
}

impl ServiceCategory {
    /// Every category, in page order.
    pub const ALL: [Self; 6] = [
        Self::Lashes,
        Self::Brows,
        Self::Lips,
        Self::Spa,
        Self::Course,
        Self::Consultation,
    ];

    /// Radio value for this category.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Lashes => "lashes",
            Self::Brows => "brows",
            Self::Lips => "lips",
            Self::Spa => "spa",
            Self::Course => "course",
            Self::Consultation => "consultation",
        }
    }

    /// This category's services, in display order.
    #[must_use]
    pub const fn services(self) -> &'static [ServiceOption] {
        match self {
            Self::Lashes => LASHES,
            Self::Brows => BROWS,
            Self::Lips => LIPS,
            Self::Spa => SPA,
            Self::Course => COURSES,
            Self::Consultation => CONSULTATION,
        }
    }

    /// The service in this category with `value`.
    #[must_use]
    pub fn find(self, value: &str) -> Option<&'static ServiceOption> {
        self.services().iter().find(|option| option.value == value)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A radio value that names no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ServiceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Full option list for the select after choosing radio value `key`:
/// the placeholder, then the category's services. Unknown keys get only
/// the placeholder.
#[must_use]
pub fn select_options(key: &str) -> Vec<ServiceOption> {
    let services = key
        .parse::<ServiceCategory>()
        .map_or(&[][..], ServiceCategory::services);

    let mut options = Vec::with_capacity(services.len() + 1);
    options.push(PLACEHOLDER);
    options.extend_from_slice(services);
    options
}

/// A `?course=<value>` deep link into the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    course: String,
}

impl DeepLink {
    /// Read the `course` parameter from a `location.search` string (with
    /// or without the leading `?`). An empty value counts as absent.
    #[must_use]
    pub fn from_query(search: &str) -> Option<Self> {
        let query = search.strip_prefix('?').unwrap_or(search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == COURSE_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(|course| Self { course })
    }

    /// Category the deep link selects.
    #[must_use]
    pub const fn category(&self) -> ServiceCategory {
        ServiceCategory::Course
    }

    /// Raw parameter value.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// The course option the link names, if it exists. No match leaves the
    /// select on its placeholder.
    #[must_use]
    pub fn resolve(&self) -> Option<&'static ServiceOption> {
        self.category().find(&self.course)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_spa_options_in_order() {
        let options = select_options("spa");
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], PLACEHOLDER);
        let values: Vec<_> = options[1..].iter().map(|o| o.value).collect();
        assert_eq!(values, ["facial", "massage", "lash-tint", "brow-lamination"]);
        assert_eq!(options[3].label, "Lash & Brow Tinting - $35");
    }

    #[test]
    fn test_category_sizes() {
        let sizes: Vec<_> = ServiceCategory::ALL
            .iter()
            .map(|c| c.services().len())
            .collect();
        assert_eq!(sizes, [4, 4, 3, 4, 6, 1]);
    }

    #[test]
    fn test_unknown_category_only_placeholder() {
        assert_eq!(select_options("nails"), vec![PLACEHOLDER]);
        assert!("nails".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_key_roundtrip() {
        for category in ServiceCategory::ALL {
            assert_eq!(category.key().parse::<ServiceCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_deep_link_matching_course() {
        let link = DeepLink::from_query("?course=microblading-course").unwrap();
        assert_eq!(link.category(), ServiceCategory::Course);
        assert_eq!(
            link.resolve().unwrap().label,
            "Microblading Certification - $2,500"
        );
    }

    #[test]
    fn test_deep_link_among_other_params() {
        let link = DeepLink::from_query("utm_source=ig&course=lip-blush-course").unwrap();
        assert_eq!(link.course(), "lip-blush-course");
        assert!(link.resolve().is_some());
    }

    #[test]
    fn test_deep_link_unmatched_value() {
        let link = DeepLink::from_query("?course=facial").unwrap();
        assert!(link.resolve().is_none());
    }

    #[test]
    fn test_deep_link_absent_or_empty() {
        assert!(DeepLink::from_query("").is_none());
        assert!(DeepLink::from_query("?service=spa").is_none());
        assert!(DeepLink::from_query("?course=").is_none());
    }

    #[test]
    fn test_deep_link_decodes_value() {
        let link = DeepLink::from_query("?course=lash%2Dcertification").unwrap();
        assert_eq!(link.course(), "lash-certification");
    }
}
