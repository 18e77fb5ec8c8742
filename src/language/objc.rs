//! Objective-C classes with a dictionary initializer
//!
//! Every model produces an implementation file (`.m`) and a companion header
//! (`.h`). Scalars are read through `integerValue`/`doubleValue`/`boolValue`,
//! so a key missing from the dictionary leaves the property at zero.

use std::collections::BTreeSet;

use super::{LanguageFormatter, escape_literal};
use crate::domain::{Line, PropertyType};
use crate::generator::HeaderContext;
use crate::schema::naming::lower_camel;

/// C and Objective-C keywords plus `NSObject` members a property must not shadow
const RESERVED: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "id", "self", "super", "nil", "in", "out",
    "inout", "bycopy", "byref", "oneway", "description", "debugDescription", "hash", "class",
    "superclass", "copy", "mutableCopy", "init", "new", "alloc", "retain", "release",
    "autorelease", "zone", "dealloc",
];

const INITIALIZER: &str = "- (id)initWithDictionary:(NSDictionary *)dictionary";

fn objc_property_name(key: &str) -> String {
    let name = lower_camel(key);
    if RESERVED.contains(&name.as_str()) {
        format!("{name}Value")
    } else {
        name
    }
}

/// Nested models referenced by a model's properties
fn referenced_models(lines: &[Line]) -> BTreeSet<&str> {
    lines
        .iter()
        .filter_map(|l| l.property_type.model_name())
        .collect()
}

/// Formatter for the Objective-C implementation file
#[derive(Debug, Clone, Default)]
pub struct ObjcFormatter {
    header: ObjcHeaderFormatter,
}

impl ObjcFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn value_expression(property_type: &PropertyType, key: &str) -> String {
        let raw = format!("dictionary[@\"{}\"]", escape_literal(key));
        match property_type {
            PropertyType::Bool => format!("[{raw} boolValue]"),
            PropertyType::Int => format!("[{raw} integerValue]"),
            PropertyType::Double => format!("[{raw} doubleValue]"),
            PropertyType::Object(name) => format!(
                "[{raw} isKindOfClass:[NSDictionary class]] ? [[{name} alloc] initWithDictionary:{raw}] : nil"
            ),
            PropertyType::Unknown | PropertyType::String | PropertyType::Array(_) => raw,
        }
    }
}

impl LanguageFormatter for ObjcFormatter {
    fn file_extension(&self) -> &'static str {
        "m"
    }

    fn property_name(&self, key: &str) -> String {
        objc_property_name(key)
    }

    fn type_name(&self, property_type: &PropertyType) -> String {
        self.header.type_name(property_type)
    }

    fn imports(&self, model: &str, lines: &[Line], _context: &HeaderContext) -> Option<String> {
        let mut imports = vec![format!("#import \"{model}.h\"")];
        imports.extend(
            referenced_models(lines)
                .into_iter()
                .filter(|name| *name != model)
                .map(|name| format!("#import \"{name}.h\"")),
        );
        Some(format!("{}\n", imports.join("\n")))
    }

    fn model_declaration(&self, model: &str) -> String {
        format!(
            "@implementation {model}\n\n{INITIALIZER} {{\n    self = [super init];\n    if (self) {{"
        )
    }

    fn variable_string(&self, line: &Line) -> String {
        let property = &line.property;
        let key = escape_literal(&line.key);

        if let PropertyType::Array(element) = &line.property_type {
            if let PropertyType::Object(name) = element.as_ref() {
                return format!(
                    "        NSMutableArray *{property}Items = [NSMutableArray array];\n        \
                     for (NSDictionary *item in dictionary[@\"{key}\"]) {{\n            \
                     [{property}Items addObject:[[{name} alloc] initWithDictionary:item]];\n        \
                     }}\n        \
                     _{property} = {property}Items;"
                );
            }
        }

        format!(
            "        _{property} = {};",
            Self::value_expression(&line.property_type, &line.key)
        )
    }

    fn sort_key(&self, line: &Line) -> String {
        line.property.clone()
    }

    fn property(&self, variable_string: &str) -> Option<String> {
        let rest = variable_string.trim_start().strip_prefix('_')?;
        let (name, _) = rest.split_once('=')?;
        Some(name.trim().to_string())
    }

    fn model_end(&self, _model: &str) -> String {
        "    }\n    return self;\n}\n\n@end".to_string()
    }

    fn companion(&self) -> Option<&dyn LanguageFormatter> {
        Some(&self.header)
    }
}

/// Formatter for the Objective-C header file
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcHeaderFormatter;

impl ObjcHeaderFormatter {
    fn attributes(line: &Line) -> &'static str {
        match (line.property_type.is_scalar(), line.is_optional) {
            (true, _) => "nonatomic, assign",
            (false, false) => "nonatomic, strong",
            (false, true) => "nonatomic, strong, nullable",
        }
    }

    fn element_type(&self, element: &PropertyType) -> String {
        match element {
            PropertyType::Bool | PropertyType::Int | PropertyType::Double => {
                "NSNumber *".to_string()
            }
            other => self.type_name(other),
        }
    }
}

impl LanguageFormatter for ObjcHeaderFormatter {
    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn property_name(&self, key: &str) -> String {
        objc_property_name(key)
    }

    fn type_name(&self, property_type: &PropertyType) -> String {
        match property_type {
            PropertyType::Unknown => "id".to_string(),
            PropertyType::Bool => "BOOL".to_string(),
            PropertyType::Int => "NSInteger".to_string(),
            PropertyType::Double => "double".to_string(),
            PropertyType::String => "NSString *".to_string(),
            PropertyType::Object(name) => format!("{name} *"),
            PropertyType::Array(element) => {
                format!("NSArray<{}> *", self.element_type(element))
            }
        }
    }

    fn imports(&self, model: &str, lines: &[Line], _context: &HeaderContext) -> Option<String> {
        let mut imports = "#import <Foundation/Foundation.h>\n".to_string();
        let forward: Vec<&str> = referenced_models(lines)
            .into_iter()
            .filter(|name| *name != model)
            .collect();
        if !forward.is_empty() {
            imports.push_str(&format!("\n@class {};\n", forward.join(", ")));
        }
        Some(imports)
    }

    fn model_declaration(&self, model: &str) -> String {
        format!("@interface {model}: NSObject")
    }

    fn variable_string(&self, line: &Line) -> String {
        let type_name = self.type_name(&line.property_type);
        let declaration = if type_name.ends_with('*') {
            format!("{type_name}{}", line.property)
        } else {
            format!("{type_name} {}", line.property)
        };
        format!("\n@property ({}) {declaration};", Self::attributes(line))
    }

    fn property(&self, variable_string: &str) -> Option<String> {
        let trimmed = variable_string.trim();
        if !trimmed.starts_with("@property") {
            return None;
        }
        let (declaration, _) = trimmed.split_once(';')?;
        let name = declaration
            .rsplit(|c: char| c.is_whitespace() || c == '*')
            .next()?;
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn wrap_custom(&self, _line: &Line, custom_line: &str) -> String {
        format!("\n{custom_line}")
    }

    fn model_end(&self, _model: &str) -> String {
        format!("\n{INITIALIZER};\n\n@end")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(key: &str, property_type: PropertyType, optional: bool) -> Line {
        Line::new(key, objc_property_name(key), property_type, optional)
    }

    #[test]
    fn test_header_property_lines() {
        let f = ObjcHeaderFormatter;
        assert_eq!(
            f.variable_string(&line("count", PropertyType::Int, false)),
            "\n@property (nonatomic, assign) NSInteger count;"
        );
        assert_eq!(
            f.variable_string(&line("average", PropertyType::Double, true)),
            "\n@property (nonatomic, assign) double average;"
        );
        assert_eq!(
            f.variable_string(&line("itemNumber", PropertyType::String, false)),
            "\n@property (nonatomic, strong) NSString *itemNumber;"
        );
        assert_eq!(
            f.variable_string(&line(
                "images",
                PropertyType::Array(Box::new(PropertyType::Object("Images".into()))),
                true
            )),
            "\n@property (nonatomic, strong, nullable) NSArray<Images *> *images;"
        );
        assert_eq!(
            f.variable_string(&line(
                "scores",
                PropertyType::Array(Box::new(PropertyType::Int)),
                false
            )),
            "\n@property (nonatomic, strong) NSArray<NSNumber *> *scores;"
        );
    }

    #[test]
    fn test_reserved_names_get_suffix() {
        assert_eq!(objc_property_name("description"), "descriptionValue");
        assert_eq!(objc_property_name("id"), "idValue");
        assert_eq!(objc_property_name("product_description"), "productDescription");
    }

    #[test]
    fn test_header_property_parsing() {
        let f = ObjcHeaderFormatter;
        assert_eq!(
            f.property("@property (nonatomic, strong) Money *price; // modelsync:custom"),
            Some("price".to_string())
        );
        assert_eq!(
            f.property("@property (nonatomic, assign) NSInteger count;"),
            Some("count".to_string())
        );
        assert_eq!(f.property("@interface Rating: NSObject"), None);
    }

    #[test]
    fn test_header_forward_declarations() {
        let f = ObjcHeaderFormatter;
        let context = HeaderContext::new("Shop");
        let lines = vec![
            line("price", PropertyType::Object("Price".into()), false),
            line(
                "tabs",
                PropertyType::Array(Box::new(PropertyType::Object("Tabs".into()))),
                false,
            ),
        ];
        assert_eq!(
            f.imports("MatrixOptions", &lines, &context).unwrap(),
            "#import <Foundation/Foundation.h>\n\n@class Price, Tabs;\n"
        );
    }

    #[test]
    fn test_implementation_assignments() {
        let f = ObjcFormatter::new();
        assert_eq!(
            f.variable_string(&line("count", PropertyType::Int, false)),
            "        _count = [dictionary[@\"count\"] integerValue];"
        );
        assert_eq!(
            f.variable_string(&line("average", PropertyType::Double, false)),
            "        _average = [dictionary[@\"average\"] doubleValue];"
        );
        assert!(
            f.variable_string(&line("price", PropertyType::Object("Price".into()), false))
                .contains("[[Price alloc] initWithDictionary:dictionary[@\"price\"]]")
        );

        let images = f.variable_string(&line(
            "images",
            PropertyType::Array(Box::new(PropertyType::Object("Images".into()))),
            false,
        ));
        assert!(images.contains("for (NSDictionary *item in dictionary[@\"images\"])"));
        assert!(images.ends_with("_images = imagesItems;"));
    }

    #[test]
    fn test_implementation_escapes_key() {
        let f = ObjcFormatter::new();
        let quoted = Line::new(r#"say "hi""#, "sayHi", PropertyType::Int, false);
        assert_eq!(
            f.variable_string(&quoted),
            r#"        _sayHi = [dictionary[@"say \"hi\""] integerValue];"#
        );
    }

    #[test]
    fn test_implementation_imports_and_property_parsing() {
        let f = ObjcFormatter::new();
        let lines = vec![line("price", PropertyType::Object("Price".into()), false)];
        assert_eq!(
            f.imports("MatrixOptions", &lines, &HeaderContext::new("Shop")).unwrap(),
            "#import \"MatrixOptions.h\"\n#import \"Price.h\"\n"
        );
        assert_eq!(
            f.property("        _price = [Money fromDictionary:dictionary]; // modelsync:custom"),
            Some("price".to_string())
        );
        assert_eq!(f.companion().map(|c| c.file_extension()), Some("h"));
    }
}
