use std::fmt;

use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum ServiceType {
    Mobile,
    Landline,
}

impl ServiceType {
    /// Maps the numeric menu choice: 1 is mobile, 0 is landline.
    pub fn from_selection(code: i64) -> Option<ServiceType> {
        match code {
            1 => Some(ServiceType::Mobile),
            0 => Some(ServiceType::Landline),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Mobile => write!(f, "mobile"),
            ServiceType::Landline => write!(f, "landline"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ServiceType;

    #[test]
    fn test_from_selection() {
        assert_eq!(Some(ServiceType::Mobile), ServiceType::from_selection(1));
        assert_eq!(Some(ServiceType::Landline), ServiceType::from_selection(0));
        assert_eq!(None, ServiceType::from_selection(2));
        assert_eq!(None, ServiceType::from_selection(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!("mobile", ServiceType::Mobile.to_string());
        assert_eq!("landline", ServiceType::Landline.to_string());
    }
}
