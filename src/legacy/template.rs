//! SOAP request rendering.
//!
//! The skeleton is split once around its placeholder; rendering is then a
//! plain concatenation with the XML-escaped value in the middle.

use quick_xml::escape::escape;

use crate::legacy::error::TemplateError;

/// Marker replaced by the country name.
pub const PLACEHOLDER: &str = "{{country}}";

/// `getCountryRequest` envelope understood by the legacy country service.
pub const GET_COUNTRY_SKELETON: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:gs="http://spring.io/guides/gs-producing-web-service">
	<soapenv:Header/><soapenv:Body><gs:getCountryRequest><gs:name>{{country}}</gs:name></gs:getCountryRequest></soapenv:Body></soapenv:Envelope>"#;

/// A parsed request skeleton with exactly one substitution point.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    prefix: String,
    suffix: String,
}

impl RequestTemplate {
    /// Split `skeleton` around [`PLACEHOLDER`].
    pub fn parse(skeleton: &str) -> Result<Self, TemplateError> {
        let count = skeleton.matches(PLACEHOLDER).count();
        match count {
            0 => Err(TemplateError::MissingPlaceholder(PLACEHOLDER)),
            1 => {
                let (prefix, suffix) = skeleton
                    .split_once(PLACEHOLDER)
                    .ok_or(TemplateError::MissingPlaceholder(PLACEHOLDER))?;
                Ok(Self {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            count => Err(TemplateError::RepeatedPlaceholder {
                placeholder: PLACEHOLDER,
                count,
            }),
        }
    }

    /// The `getCountryRequest` template.
    pub fn get_country() -> Result<Self, TemplateError> {
        Self::parse(GET_COUNTRY_SKELETON)
    }

    /// Render the document for `value`. Markup characters in `value`
    /// are escaped so it always lands as text content.
    pub fn render(&self, value: &str) -> String {
        let escaped = escape(value);
        let mut document =
            String::with_capacity(self.prefix.len() + escaped.len() + self.suffix.len());
        document.push_str(&self.prefix);
        document.push_str(&escaped);
        document.push_str(&self.suffix);
        document
    }
}
