//! Java source emitter for the `Countries` lookup class.

use crate::emit::Emitter;
use crate::errors::EmitError;
use crate::grouping::DialCodeGroups;
use crate::types::Country;
use std::fmt::Write;

/// Package of the phone field library.
pub const DEFAULT_PACKAGE: &str = "com.github.ialokim.phonefield";

/// Name of the generated class.
pub const DEFAULT_CLASS_NAME: &str = "Countries";

const IMPORTS: &[&str] = &[
    "java.util.Arrays",
    "java.util.Collections",
    "java.util.HashMap",
    "java.util.List",
    "java.util.Map",
];

/// Indent of the statements inside the static initializer.
const STATEMENT_INDENT: usize = 8;

/// Renders the groups as a Java class with a static
/// `Map<Integer, List<Country>> COUNTRIES` table.
///
/// Single-element lists use `Collections.singletonList`, longer ones
/// `Arrays.asList` with one element per line. Countries with area codes
/// use the four argument `Country` constructor.
///
/// # Example
///
/// ```rust
/// use countries_generator::{group_and_validate, Country, DialCode, Emitter, Iso2, JavaEmitter};
///
/// let de = Country::new(Iso2::new("de")?, DialCode::new("49")?, false);
/// let groups = group_and_validate(vec![de])?;
///
/// let source = JavaEmitter::new().emit(&groups)?;
/// assert!(source.contains(
///     "COUNTRIES.put(49, Collections.singletonList(new Country(\"de\", 49, false)));"
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JavaEmitter {
    package: String,
    class_name: String,
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl JavaEmitter {
    /// Create an emitter for the default package and class name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package of the generated class.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the name of the generated class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Package of the generated class.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Name of the generated class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    fn check_names(&self) -> Result<(), EmitError> {
        if !self.package.split('.').all(is_java_identifier) {
            return Err(EmitError::InvalidPackage(self.package.clone()));
        }
        if !is_java_identifier(&self.class_name) {
            return Err(EmitError::InvalidClassName(self.class_name.clone()));
        }
        Ok(())
    }
}

impl Emitter for JavaEmitter {
    fn emit(&self, groups: &DialCodeGroups) -> Result<String, EmitError> {
        self.check_names()?;

        let mut out = String::new();
        writeln!(out, "package {};", self.package)?;
        writeln!(out)?;
        for import in IMPORTS {
            writeln!(out, "import {import};")?;
        }
        writeln!(out)?;
        writeln!(out, "public final class {} {{", self.class_name)?;
        writeln!(out)?;
        line(
            &mut out,
            4,
            "public static final Map<Integer,List<Country>> COUNTRIES = new HashMap<>();",
        )?;
        line(&mut out, 4, "static {")?;

        for (dial_code, group) in groups {
            match group {
                [country] => line(
                    &mut out,
                    STATEMENT_INDENT,
                    &format!(
                        "COUNTRIES.put({dial_code}, Collections.singletonList({}));",
                        country_expr(country, STATEMENT_INDENT)
                    ),
                )?,
                _ => {
                    line(
                        &mut out,
                        STATEMENT_INDENT,
                        &format!("COUNTRIES.put({dial_code}, Arrays.asList("),
                    )?;
                    for (idx, country) in group.iter().enumerate() {
                        let sep = if idx + 1 == group.len() { "" } else { "," };
                        line(
                            &mut out,
                            STATEMENT_INDENT + 4,
                            &format!("{}{sep}", country_expr(country, STATEMENT_INDENT)),
                        )?;
                    }
                    line(&mut out, STATEMENT_INDENT, "));")?;
                }
            }
        }

        line(&mut out, 4, "}")?;
        writeln!(out)?;
        writeln!(out, "}}")?;
        Ok(out)
    }
}

fn line(out: &mut String, indent: usize, text: &str) -> Result<(), EmitError> {
    writeln!(out, "{:indent$}{text}", "")?;
    Ok(())
}

/// `new Country(...)` expression. Area code lines are indented relative
/// to `offset`.
fn country_expr(country: &Country, offset: usize) -> String {
    let mut expr = format!(
        "new Country(\"{}\", {}, {}",
        country.iso2, country.dial_code, country.priority
    );
    match country.area_codes.as_deref() {
        None | Some([]) => {}
        Some([code]) => {
            expr.push_str(&format!(", Collections.singletonList(\"{code}\")"));
        }
        Some(codes) => {
            expr.push_str(", Arrays.asList(\n");
            for (idx, code) in codes.iter().enumerate() {
                let sep = if idx + 1 == codes.len() { "" } else { "," };
                expr.push_str(&format!("{:indent$}\"{code}\"{sep}\n", "", indent = offset + 8));
            }
            expr.push_str(&format!("{:indent$})", "", indent = offset + 4));
        }
    }
    expr.push(')');
    expr
}

/// Reserved words and literals that can't name a package segment or class.
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

fn is_java_identifier(s: &str) -> bool {
    if JAVA_RESERVED.contains(&s) {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_and_validate;
    use crate::types::AreaCode;

    fn country(iso2: &str, dial_code: &str, priority: bool) -> Country {
        Country::new(iso2.parse().unwrap(), dial_code.parse().unwrap(), priority)
    }

    fn area_codes(codes: &[&str]) -> Vec<AreaCode> {
        codes.iter().map(|c| AreaCode::new(c).unwrap()).collect()
    }

    #[test]
    fn test_country_expr_plain() {
        assert_eq!(
            country_expr(&country("us", "1", true), 8),
            r#"new Country("us", 1, true)"#
        );
        assert_eq!(
            country_expr(&country("de", "49", false), 8),
            r#"new Country("de", 49, false)"#
        );
    }

    #[test]
    fn test_country_expr_single_area_code() {
        let jm = country("jm", "1", false)
            .with_area_codes(area_codes(&["876"]))
            .unwrap();
        assert_eq!(
            country_expr(&jm, 8),
            r#"new Country("jm", 1, false, Collections.singletonList("876"))"#
        );
    }

    #[test]
    fn test_country_expr_many_area_codes() {
        let ca = country("ca", "1", false)
            .with_area_codes(area_codes(&["204", "226"]))
            .unwrap();
        let expected = concat!(
            "new Country(\"ca\", 1, false, Arrays.asList(\n",
            "                \"204\",\n",
            "                \"226\"\n",
            "            ))",
        );
        assert_eq!(country_expr(&ca, 8), expected);
    }

    #[test]
    fn test_emit_full_class() {
        let ca = country("ca", "1", false)
            .with_area_codes(area_codes(&["204", "226"]))
            .unwrap();
        let groups = group_and_validate(vec![
            country("de", "49", false),
            country("us", "1", true),
            ca,
        ])
        .unwrap();

        let source = JavaEmitter::new().emit(&groups).unwrap();
        let expected = r#"package com.github.ialokim.phonefield;

import java.util.Arrays;
import java.util.Collections;
import java.util.HashMap;
import java.util.List;
import java.util.Map;

public final class Countries {

    public static final Map<Integer,List<Country>> COUNTRIES = new HashMap<>();
    static {
        COUNTRIES.put(1, Arrays.asList(
            new Country("ca", 1, false, Arrays.asList(
                "204",
                "226"
            )),
            new Country("us", 1, true)
        ));
        COUNTRIES.put(49, Collections.singletonList(new Country("de", 49, false)));
    }

}
"#;
        assert_eq!(source, expected);
    }

    #[test]
    fn test_emit_custom_names() {
        let groups = group_and_validate(vec![country("de", "49", false)]).unwrap();
        let source = JavaEmitter::new()
            .with_package("org.example.phone")
            .with_class_name("DialCodes")
            .emit(&groups)
            .unwrap();
        assert!(source.starts_with("package org.example.phone;\n"));
        assert!(source.contains("public final class DialCodes {"));
    }

    #[test]
    fn test_emit_empty_table() {
        let source = JavaEmitter::new().emit(&DialCodeGroups::default()).unwrap();
        assert!(source.contains("    static {\n    }\n"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let groups = DialCodeGroups::default();
        assert!(matches!(
            JavaEmitter::new().with_package("com..example").emit(&groups),
            Err(EmitError::InvalidPackage(_))
        ));
        assert!(matches!(
            JavaEmitter::new().with_class_name("1Countries").emit(&groups),
            Err(EmitError::InvalidClassName(_))
        ));
    }

    #[test]
    fn test_is_java_identifier() {
        assert!(is_java_identifier("Countries"));
        assert!(is_java_identifier("_x$1"));
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("9a"));
        assert!(!is_java_identifier("a-b"));
        assert!(!is_java_identifier("class"));
        assert!(!is_java_identifier("null"));
        assert!(!is_java_identifier("_"));
        assert!(is_java_identifier("Class"));
    }

    #[test]
    fn test_reserved_names_rejected() {
        let groups = DialCodeGroups::default();
        assert!(matches!(
            JavaEmitter::new().with_package("com.int.example").emit(&groups),
            Err(EmitError::InvalidPackage(_))
        ));
        assert!(matches!(
            JavaEmitter::new().with_class_name("class").emit(&groups),
            Err(EmitError::InvalidClassName(_))
        ));
    }
}
