//! Sort configuration for collections of dynamic [`Value`](crate::types::Value)s.

use strum::{Display, EnumString};

/// sort order, default is Asc
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, EnumString, Display)]
pub enum SortOrder {
    /// The order type, ASC
    #[default]
    #[strum(to_string = "ASC", ascii_case_insensitive)]
    Asc,
    /// The order type, DESC
    #[strum(to_string = "DESC", ascii_case_insensitive)]
    Desc,
}

/// null order, default is nulls first
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, EnumString, Display)]
pub enum NullOrder {
    /// Null ordering, NullsFirst
    #[default]
    #[strum(to_string = "NULLS_FIRST", ascii_case_insensitive)]
    NullsFirst,
    /// Null ordering, NullsLast
    #[strum(to_string = "NULLS_LAST", ascii_case_insensitive)]
    NullsLast,
}

/// How [`sort_with`](crate::Collection::sort_with) orders values.
///
/// ```rust
/// use ordcoll::config::{NullOrder, SortConfig, SortOrder};
///
/// let config = SortConfig::default().order(SortOrder::Desc).null_order(NullOrder::NullsLast);
/// assert_eq!(config.to_string(), "DESC NULLS_LAST");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortConfig {
    order: SortOrder,
    null_order: NullOrder,
}

impl SortConfig {
    /// The order non-null values are sorted in (`ASC` or `DESC`)
    pub fn order(mut self, order: SortOrder) -> SortConfig {
        self.order = order;
        self
    }

    /// Where nulls are placed (`NULLS_FIRST` or `NULLS_LAST`), regardless of
    /// the sort order
    pub fn null_order(mut self, null_order: NullOrder) -> SortConfig {
        self.null_order = null_order;
        self
    }

    /// Parse a setting by name, as in `("order", "desc")` or
    /// `("null_order", "NULLS_LAST")`.
    pub fn with(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> crate::Result<SortConfig> {
        let (key, value) = (key.as_ref(), value.as_ref());
        match key {
            "order" => self.order = parse_setting(key, value)?,
            "null_order" => self.null_order = parse_setting(key, value)?,
            _ => return Err(crate::error::invalid_argument("sort_config", format!("unknown setting {key}"))),
        }
        Ok(self)
    }

    /// The configured sort order.
    #[inline]
    pub fn get_order(&self) -> SortOrder {
        self.order
    }

    /// The configured null placement.
    #[inline]
    pub fn get_null_order(&self) -> NullOrder {
        self.null_order
    }
}

impl std::fmt::Display for SortConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.order, self.null_order)
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, value: &str) -> crate::Result<T> {
    value
        .parse()
        .map_err(|_| crate::error::invalid_argument("sort_config", format!("invalid value {value} for {key}")))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, Result};

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.get_order(), SortOrder::Asc);
        assert_eq!(config.get_null_order(), NullOrder::NullsFirst);
        assert_eq!(config.to_string(), "ASC NULLS_FIRST");
    }

    #[test]
    fn test_with() -> Result<()> {
        let config = SortConfig::default().with("order", "desc")?.with("null_order", "NULLS_LAST")?;
        assert_eq!(config.get_order(), SortOrder::Desc);
        assert_eq!(config.get_null_order(), NullOrder::NullsLast);
        Ok(())
    }

    #[test]
    fn test_with_rejects_unknown() {
        let err = SortConfig::default().with("order", "sideways").unwrap_err();
        assert_eq!(err, Error::InvalidArgument("invalid value sideways for order".to_string()));

        let err = SortConfig::default().with("limit", "3").unwrap_err();
        assert_eq!(err, Error::InvalidArgument("unknown setting limit".to_string()));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("nulls_last".parse::<NullOrder>(), Ok(NullOrder::NullsLast));
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
    }
}
