//! Schema node definitions
//!
//! Supported shapes:
//! - basic: a scalar of one `BasicKind`
//! - struct: ordered fields; order is the wire position
//! - collection: list or table of a single element schema

use serde::{Deserialize, Serialize};

/// Scalar kinds carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicKind {
    /// Opaque byte string
    Bytes,
    /// UTF-8 string
    Str,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int64,
    /// 32-bit float (carried as f64 on the wire)
    Float32,
    /// 64-bit float
    Float64,
    /// UUID, carried as its 16 canonical bytes
    Uuid,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time without offset
    LocalDateTime,
    /// Date and time with a fixed UTC offset
    OffsetDateTime,
}

impl BasicKind {
    /// Returns the kind name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            BasicKind::Bytes => "bytes",
            BasicKind::Str => "str",
            BasicKind::Bool => "bool",
            BasicKind::Int64 => "int64",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Uuid => "uuid",
            BasicKind::Date => "date",
            BasicKind::Time => "time",
            BasicKind::LocalDateTime => "local_date_time",
            BasicKind::OffsetDateTime => "offset_date_time",
        }
    }
}

/// Collection flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Ordered list of elements
    List,
    /// Rows of a struct element; keying is up to the engine
    Table,
}

impl CollectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            CollectionKind::List => "list",
            CollectionKind::Table => "table",
        }
    }
}

/// Expected shape of a wire value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    /// Single scalar
    Basic { basic: BasicKind },
    /// Ordered fields; wire position `i` holds field `i`
    Struct { fields: Vec<FieldSchema> },
    /// Homogeneous collection
    Collection {
        collection: CollectionKind,
        /// Element schema (boxed to allow recursive nesting)
        element: Box<SchemaNode>,
    },
}

impl SchemaNode {
    pub fn basic(kind: BasicKind) -> Self {
        SchemaNode::Basic { basic: kind }
    }

    pub fn struct_of(fields: Vec<FieldSchema>) -> Self {
        SchemaNode::Struct { fields }
    }

    pub fn list_of(element: SchemaNode) -> Self {
        SchemaNode::Collection {
            collection: CollectionKind::List,
            element: Box::new(element),
        }
    }

    pub fn table_of(element: SchemaNode) -> Self {
        SchemaNode::Collection {
            collection: CollectionKind::Table,
            element: Box::new(element),
        }
    }

    /// Returns the node name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Basic { basic } => basic.name(),
            SchemaNode::Struct { .. } => "struct",
            SchemaNode::Collection { collection, .. } => collection.name(),
        }
    }

    /// Validates the node tree itself (not a value).
    ///
    /// Struct field names must be non-empty and unique within their struct,
    /// and table elements must be structs.
    pub fn validate_structure(&self) -> Result<(), String> {
        match self {
            SchemaNode::Basic { .. } => Ok(()),
            SchemaNode::Struct { fields } => {
                for (i, field) in fields.iter().enumerate() {
                    if field.name.is_empty() {
                        return Err(format!("struct field #{} has an empty name", i));
                    }
                    if fields[..i].iter().any(|f| f.name == field.name) {
                        return Err(format!("duplicate struct field '{}'", field.name));
                    }
                    field
                        .node
                        .validate_structure()
                        .map_err(|e| format!("in field '{}': {}", field.name, e))?;
                }
                Ok(())
            }
            SchemaNode::Collection {
                collection,
                element,
            } => {
                if *collection == CollectionKind::Table
                    && !matches!(element.as_ref(), SchemaNode::Struct { .. })
                {
                    return Err(format!(
                        "table rows must be structs, got {}",
                        element.type_name()
                    ));
                }
                element.validate_structure()
            }
        }
    }
}

/// One struct field; the name is for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub node: SchemaNode,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}
