use crate::domain::{OutreachStatus, Platform};
use crate::filter::query::OutreachFilter;
use crate::filter::FilterParseError;

/// Parses `acme platform:linkedin status:deal-done`. Selector tokens set the
/// platform and status; the remaining words form the search text.
pub fn parse_filter(input: &str) -> Result<OutreachFilter, FilterParseError> {
    let mut filter = OutreachFilter::default();
    let mut words = Vec::new();
    let mut seen_platform = false;
    let mut seen_status = false;

    for token in input.split_whitespace() {
        if let Some(raw) = token.strip_prefix("platform:") {
            if seen_platform {
                return Err(FilterParseError::DuplicatePlatform);
            }
            seen_platform = true;
            if raw != "all" {
                let platform = raw
                    .parse::<Platform>()
                    .map_err(|_| FilterParseError::InvalidPlatform(raw.to_string()))?;
                filter.platform = Some(platform);
            }
        } else if let Some(raw) = token.strip_prefix("status:") {
            if seen_status {
                return Err(FilterParseError::DuplicateStatus);
            }
            seen_status = true;
            if raw != "all" {
                let status = raw
                    .parse::<OutreachStatus>()
                    .map_err(|_| FilterParseError::InvalidStatus(raw.to_string()))?;
                filter.status = Some(status);
            }
        } else {
            words.push(token);
        }
    }

    if !words.is_empty() {
        filter.search = Some(words.join(" "));
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::parse_filter;
    use crate::domain::{OutreachStatus, Platform};
    use crate::filter::query::OutreachFilter;
    use crate::filter::FilterParseError;

    #[test]
    fn parse_selectors_and_text() {
        let filter = parse_filter("acme corp platform:linkedin status:deal-done").unwrap();
        assert_eq!(
            filter,
            OutreachFilter {
                search: Some("acme corp".to_string()),
                platform: Some(Platform::LinkedIn),
                status: Some(OutreachStatus::DealDone),
            }
        );
    }

    #[test]
    fn empty_input_is_match_all() {
        assert_eq!(parse_filter("  ").unwrap(), OutreachFilter::default());
    }

    #[test]
    fn all_selector_leaves_field_open() {
        let filter = parse_filter("platform:all status:waiting").unwrap();
        assert_eq!(filter.platform, None);
        assert_eq!(filter.status, Some(OutreachStatus::Waiting));
    }

    #[test]
    fn invalid_selector_is_error() {
        assert_eq!(
            parse_filter("platform:myspace").unwrap_err(),
            FilterParseError::InvalidPlatform("myspace".to_string())
        );
        assert_eq!(
            parse_filter("status:maybe").unwrap_err(),
            FilterParseError::InvalidStatus("maybe".to_string())
        );
    }

    #[test]
    fn repeated_selector_is_error() {
        assert_eq!(
            parse_filter("status:waiting status:deal-done").unwrap_err(),
            FilterParseError::DuplicateStatus
        );
    }
}
