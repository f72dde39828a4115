//! Series and family classification.
//!
//! The driver catalog groups devices into series whose names follow a few
//! naming generations. The model code (`1060`, `960M`, `MX350`, `980`) is
//! dispatched into a [`ModelCode`] variant, and each variant renders the
//! series fragment of the catalog label. Any code that fits no variant is
//! rejected rather than guessed.

use crate::core::device::DeviceIdentity;
use crate::error::{NvduError, Result};

/// Catalog filter values derived from a device identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesClassification {
    pub product_class: String,
    pub series_label: String,
    pub family_label: String,
}

/// Naming generation of a model code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelCode {
    /// `MX350` -> `MX300`
    Mx { hundreds: char },
    /// `960M` -> `900M`
    Mobile { generation: char },
    /// `2070` -> `RTX 20`, also notebook `1660` -> `GTX 16`
    Qualified { qualifier: String, generation: String },
    /// `1060` -> `10`
    Generation { generation: String },
    /// `980` -> `900`, notebook `980` -> `900M`
    Legacy { generation: char, notebook: bool },
}

impl ModelCode {
    /// Pick the variant for a model code
    ///
    /// `qualifier` is the token between the product class and the model
    /// code (`GTX`, `RTX`), absent for two-token names like `GeForce 605`.
    pub fn dispatch(code: &str, qualifier: Option<&str>, is_notebook: bool) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        let unrecognized = || {
            NvduError::classification(format!("unrecognized model code '{}'", code))
        };

        if !chars.iter().all(char::is_ascii_alphanumeric) {
            return Err(unrecognized());
        }

        match chars.len() {
            5 => {
                if code.starts_with("MX") && chars[2].is_ascii_digit() {
                    Ok(ModelCode::Mx { hundreds: chars[2] })
                } else {
                    Err(unrecognized())
                }
            }
            4 if chars[3] == 'M' => {
                if chars[0].is_ascii_digit() {
                    Ok(ModelCode::Mobile { generation: chars[0] })
                } else {
                    Err(unrecognized())
                }
            }
            4 => {
                let lead = chars[0].to_digit(10).ok_or_else(unrecognized)?;
                if !chars[1].is_ascii_digit() {
                    return Err(unrecognized());
                }
                let generation: String = chars[..2].iter().collect();

                if lead >= 2 || (is_notebook && generation == "16") {
                    let qualifier = qualifier.ok_or_else(|| {
                        NvduError::classification(format!(
                            "model code '{}' needs a class qualifier such as GTX or RTX",
                            code
                        ))
                    })?;
                    Ok(ModelCode::Qualified {
                        qualifier: qualifier.to_string(),
                        generation,
                    })
                } else {
                    Ok(ModelCode::Generation { generation })
                }
            }
            3 => {
                if chars[0].is_ascii_digit() {
                    Ok(ModelCode::Legacy {
                        generation: chars[0],
                        notebook: is_notebook,
                    })
                } else {
                    Err(unrecognized())
                }
            }
            _ => Err(unrecognized()),
        }
    }

    /// Series fragment placed between the product class and `Series`
    pub fn series_name(&self) -> String {
        match self {
            ModelCode::Mx { hundreds } => format!("MX{}00", hundreds),
            ModelCode::Mobile { generation } => format!("{}00M", generation),
            ModelCode::Qualified {
                qualifier,
                generation,
            } => format!("{} {}", qualifier, generation),
            ModelCode::Generation { generation } => generation.clone(),
            ModelCode::Legacy {
                generation,
                notebook,
            } => {
                if *notebook {
                    format!("{}00M", generation)
                } else {
                    format!("{}00", generation)
                }
            }
        }
    }
}

/// Derive the catalog series and family labels for a device
pub fn classify(identity: &DeviceIdentity) -> Result<SeriesClassification> {
    let tokens: Vec<&str> = identity.canonical_name.split_whitespace().collect();

    let (product_class, qualifier, code) = match tokens.as_slice() {
        [class, code] => (*class, None, *code),
        [class, qualifier, code, ..] => (*class, Some(*qualifier), *code),
        _ => {
            return Err(NvduError::classification(format!(
                "device name '{}' has no model code",
                identity.canonical_name
            )))
        }
    };

    let model = ModelCode::dispatch(code, qualifier, identity.is_notebook_variant)
        .map_err(|e| match e {
            NvduError::Classification(msg) => NvduError::classification(format!(
                "{} in '{}'",
                msg, identity.canonical_name
            )),
            other => other,
        })?;

    let series_label = format!(
        "{} {} Series{}",
        product_class,
        model.series_name(),
        identity.notebook_suffix()
    );

    log::debug!(
        "Classified '{}' as {:?} -> '{}'",
        identity.canonical_name,
        model,
        series_label
    );

    Ok(SeriesClassification {
        product_class: product_class.to_string(),
        series_label,
        family_label: identity.canonical_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, notebook: bool) -> String {
        let identity = DeviceIdentity::parse(name, notebook).unwrap();
        classify(&identity).unwrap().series_label
    }

    #[test]
    fn test_ten_series_desktop() {
        assert_eq!(series("GeForce GTX 1060", false), "GeForce 10 Series");
        assert_eq!(series("NVIDIA GeForce GTX 1080 Ti", false), "GeForce 10 Series");
    }

    #[test]
    fn test_mx_series() {
        assert_eq!(series("GeForce MX350", false), "GeForce MX300 Series");
        assert_eq!(series("GeForce MX150", true), "GeForce MX100 Series (Notebooks)");
    }

    #[test]
    fn test_legacy_notebook_gets_mobile_letter() {
        assert_eq!(series("GeForce 980", true), "GeForce 900M Series (Notebooks)");
        assert_eq!(series("GeForce GTX 980", true), "GeForce 900M Series (Notebooks)");
        assert_eq!(series("GeForce GTX 750", false), "GeForce 700 Series");
        assert_eq!(series("GeForce 605", false), "GeForce 600 Series");
    }

    #[test]
    fn test_mobile_suffix() {
        assert_eq!(series("GeForce GTX 960M", true), "GeForce 900M Series (Notebooks)");
        assert_eq!(series("GeForce 845M", true), "GeForce 800M Series (Notebooks)");
    }

    #[test]
    fn test_qualified_generations() {
        assert_eq!(series("NVIDIA GeForce RTX 2070 SUPER", false), "GeForce RTX 20 Series");
        assert_eq!(series("GeForce RTX 3080", true), "GeForce RTX 30 Series (Notebooks)");
        assert_eq!(series("GeForce RTX 4090", false), "GeForce RTX 40 Series");
    }

    #[test]
    fn test_sixteen_series_depends_on_notebook() {
        assert_eq!(series("GeForce GTX 1660 Ti", false), "GeForce 16 Series");
        assert_eq!(
            series("GeForce GTX 1650 Ti", true),
            "GeForce GTX 16 Series (Notebooks)"
        );
        assert_eq!(series("GeForce GTX 1050", true), "GeForce 10 Series (Notebooks)");
    }

    #[test]
    fn test_family_label_is_canonical_name() {
        let identity = DeviceIdentity::parse("NVIDIA GeForce GTX 1060 6GB", false).unwrap();
        let classification = classify(&identity).unwrap();
        assert_eq!(classification.product_class, "GeForce");
        assert_eq!(classification.family_label, "GeForce GTX 1060");
        assert_eq!(classification.family_label, identity.canonical_name);
    }

    #[test]
    fn test_dispatch_variants() {
        assert_eq!(
            ModelCode::dispatch("MX250", None, false).unwrap(),
            ModelCode::Mx { hundreds: '2' }
        );
        assert_eq!(
            ModelCode::dispatch("650M", Some("GT"), true).unwrap(),
            ModelCode::Mobile { generation: '6' }
        );
        assert_eq!(
            ModelCode::dispatch("3060", Some("RTX"), false).unwrap(),
            ModelCode::Qualified {
                qualifier: "RTX".to_string(),
                generation: "30".to_string()
            }
        );
        assert_eq!(
            ModelCode::dispatch("1660", Some("GTX"), true).unwrap(),
            ModelCode::Qualified {
                qualifier: "GTX".to_string(),
                generation: "16".to_string()
            }
        );
        assert_eq!(
            ModelCode::dispatch("1660", Some("GTX"), false).unwrap(),
            ModelCode::Generation {
                generation: "16".to_string()
            }
        );
        assert_eq!(
            ModelCode::dispatch("780", Some("GTX"), false).unwrap(),
            ModelCode::Legacy {
                generation: '7',
                notebook: false
            }
        );
    }

    #[test]
    fn test_unrecognized_codes_are_errors() {
        for code in ["12", "123456", "ABCDE", "X060", "1X60", "TX5", "A60M", "10-0"] {
            let err = ModelCode::dispatch(code, Some("GTX"), false).unwrap_err();
            assert!(matches!(err, NvduError::Classification(_)), "code {}", code);
        }
    }

    #[test]
    fn test_qualified_code_without_qualifier_is_an_error() {
        let identity = DeviceIdentity::parse("GeForce 2080", false).unwrap();
        assert!(classify(&identity).is_err());
    }

    #[test]
    fn test_names_without_model_code_are_errors() {
        for name in ["GeForce", "TITAN RTX", "Quadro RTX A6000"] {
            let identity = DeviceIdentity::parse(name, false).unwrap();
            let err = classify(&identity).unwrap_err();
            assert!(matches!(err, NvduError::Classification(_)), "name {}", name);
        }
    }
}
