//! Modules and Items
//!
//! A module is an ordered list of items. Only functions carry code; every
//! other item kind is declarative.

use serde::{Deserialize, Serialize};
use crate::{Function, ItemId, Type, Var};

/// Call signature descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    pub name: String,
    #[serde(default)]
    pub res_types: Vec<Type>,
    #[serde(default)]
    pub args: Vec<Var>,
    #[serde(default)]
    pub vararg: bool,
}

impl Prototype {
    pub fn new(name: impl Into<String>, res_types: Vec<Type>, args: Vec<Var>) -> Self {
        Self {
            name: name.into(),
            res_types,
            args,
            vararg: false,
        }
    }

    pub fn vararg(mut self) -> Self {
        self.vararg = true;
        self
    }

    /// Number of declared results
    pub fn nres(&self) -> usize {
        self.res_types.len()
    }

    pub fn nargs(&self) -> usize {
        self.args.len()
    }
}

/// Initialized global data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub values: Vec<i64>,
}

/// Zero-initialized global storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bss {
    pub name: String,
    pub len: u64,
}

/// Top-level module item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Function(Function),
    Prototype(Prototype),
    Import(String),
    Export(String),
    Forward(String),
    Data(Data),
    Bss(Bss),
}

impl Item {
    /// Symbol name of the item
    pub fn name(&self) -> &str {
        match self {
            Item::Function(func) => &func.name,
            Item::Prototype(proto) => &proto.name,
            Item::Import(name) | Item::Export(name) | Item::Forward(name) => name,
            Item::Data(data) => &data.name,
            Item::Bss(bss) => &bss.name,
        }
    }

    /// Short description of the item kind, for logs and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Item::Function(_) => "function",
            Item::Prototype(_) => "proto",
            Item::Import(_) => "import",
            Item::Export(_) => "export",
            Item::Forward(_) => "forward",
            Item::Data(_) => "data",
            Item::Bss(_) => "bss",
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Item::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_prototype(&self) -> Option<&Prototype> {
        match self {
            Item::Prototype(proto) => Some(proto),
            _ => None,
        }
    }
}

/// IR Module - a complete translation unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) -> ItemId {
        self.items.push(item);
        (self.items.len() - 1) as ItemId
    }

    pub fn add_function(&mut self, function: Function) -> ItemId {
        self.add_item(Item::Function(function))
    }

    pub fn add_proto(&mut self, proto: Prototype) -> ItemId {
        self.add_item(Item::Prototype(proto))
    }

    pub fn add_import(&mut self, name: impl Into<String>) -> ItemId {
        self.add_item(Item::Import(name.into()))
    }

    pub fn add_export(&mut self, name: impl Into<String>) -> ItemId {
        self.add_item(Item::Export(name.into()))
    }

    pub fn add_forward(&mut self, name: impl Into<String>) -> ItemId {
        self.add_item(Item::Forward(name.into()))
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id as usize)
    }

    /// Find the first item with the given symbol name
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.name() == name)
            .map(|i| i as ItemId)
    }

    /// Functions in emission order
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(Item::as_function)
    }
}
