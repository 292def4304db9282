use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::pin::errors::PinFieldError;
use crate::pin::errors::PinIdError;
use crate::pin::errors::PinQueryError;

/// Pin aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub id: PinId,
    pub title: PinTitle,
    pub body: PinBody,
    pub image_link: ImageLink,
    pub author: PinAuthor,
    pub date_created: DateTime<Utc>,
}

/// Pin unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(pub Uuid);

impl PinId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a pin ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PinIdError> {
        Uuid::parse_str(s)
            .map(PinId)
            .map_err(|e| PinIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn bounded_text(
    field: &'static str,
    value: String,
    max: Option<usize>,
) -> Result<String, PinFieldError> {
    if value.trim().is_empty() {
        return Err(PinFieldError::Empty { field });
    }
    let length = value.chars().count();
    match max {
        Some(max) if length > max => Err(PinFieldError::TooLong {
            field,
            max,
            actual: length,
        }),
        _ => Ok(value),
    }
}

/// Pin title, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTitle(String);

impl PinTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: String) -> Result<Self, PinFieldError> {
        bounded_text("title", title, Some(Self::MAX_LENGTH)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pin body text, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinBody(String);

impl PinBody {
    pub fn new(body: String) -> Result<Self, PinFieldError> {
        bounded_text("body", body, None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Link to the pinned image, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink(String);

impl ImageLink {
    const MAX_LENGTH: usize = 255;

    pub fn new(link: String) -> Result<Self, PinFieldError> {
        bounded_text("image_link", link, Some(Self::MAX_LENGTH)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display name of the pin author, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinAuthor(String);

impl PinAuthor {
    const MAX_LENGTH: usize = 100;

    pub fn new(author: String) -> Result<Self, PinFieldError> {
        bounded_text("author", author, Some(Self::MAX_LENGTH)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Field a pin listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PinOrderField {
    Title,
    #[default]
    DateCreated,
    Author,
}

impl PinOrderField {
    /// Column name in the pins table.
    pub fn column(&self) -> &'static str {
        match self {
            PinOrderField::Title => "title",
            PinOrderField::DateCreated => "date_created",
            PinOrderField::Author => "author",
        }
    }
}

impl FromStr for PinOrderField {
    type Err = PinQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(PinOrderField::Title),
            "date_created" => Ok(PinOrderField::DateCreated),
            "author" => Ok(PinOrderField::Author),
            other => Err(PinQueryError::InvalidOrderField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

impl FromStr for OrderDirection {
    type Err = PinQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            other => Err(PinQueryError::InvalidOrderDirection(other.to_string())),
        }
    }
}

/// Filter and ordering for pin listings.
///
/// `author` matches case-insensitively. Defaults to newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPinsQuery {
    pub author: Option<String>,
    pub order_by: PinOrderField,
    pub order_dir: OrderDirection,
}

/// Command to create a new pin with validated fields
#[derive(Debug)]
pub struct CreatePinCommand {
    pub title: PinTitle,
    pub body: PinBody,
    pub image_link: ImageLink,
    pub author: PinAuthor,
}

/// Command to update an existing pin.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdatePinCommand {
    pub title: Option<PinTitle>,
    pub body: Option<PinBody>,
    pub image_link: Option<ImageLink>,
    pub author: Option<PinAuthor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert!(PinTitle::new("Sunset".to_string()).is_ok());
        assert_eq!(
            PinTitle::new("   ".to_string()),
            Err(PinFieldError::Empty { field: "title" })
        );
        assert_eq!(
            PinTitle::new("x".repeat(256)),
            Err(PinFieldError::TooLong {
                field: "title",
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_author_validation() {
        assert!(PinAuthor::new("a".repeat(100)).is_ok());
        assert!(PinAuthor::new("a".repeat(101)).is_err());
    }

    #[test]
    fn test_body_has_no_upper_bound() {
        assert!(PinBody::new("b".repeat(10_000)).is_ok());
        assert!(PinBody::new(String::new()).is_err());
    }

    #[test]
    fn test_order_field_parsing() {
        assert_eq!("title".parse(), Ok(PinOrderField::Title));
        assert_eq!("date_created".parse(), Ok(PinOrderField::DateCreated));
        assert_eq!("author".parse(), Ok(PinOrderField::Author));
        assert_eq!(
            "body".parse::<PinOrderField>(),
            Err(PinQueryError::InvalidOrderField("body".to_string()))
        );
    }

    #[test]
    fn test_order_direction_parsing() {
        assert_eq!("asc".parse(), Ok(OrderDirection::Asc));
        assert_eq!("desc".parse(), Ok(OrderDirection::Desc));
        assert!("ASC; DROP TABLE pins".parse::<OrderDirection>().is_err());
    }

    #[test]
    fn test_query_defaults() {
        let query = ListPinsQuery::default();
        assert_eq!(query.author, None);
        assert_eq!(query.order_by, PinOrderField::DateCreated);
        assert_eq!(query.order_dir, OrderDirection::Desc);
    }
}
