//! Type handles.
//!
//! The lowering pass never reasons about types beyond a few shape questions
//! (is this a delegate? what is the element type of this array?), so the
//! pool only models enough structure to answer those.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Name, SymbolId};

/// A 32-bit index into the [`TypePool`].
///
/// Primitive types have fixed indices; compound types are interned on
/// demand. Type equality is index equality.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const OBJECT: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const CHAR: Self = Self(2);
    pub const INT: Self = Self(3);
    pub const LONG: Self = Self(4);
    pub const DOUBLE: Self = Self(5);
    pub const STRING: Self = Self(6);
    pub const VOID: Self = Self(7);
    /// The `dynamic` pseudo-type; member lookup is deferred to runtime.
    pub const DYNAMIC: Self = Self(8);
    /// Placeholder for a type that failed to resolve.
    pub const ERROR: Self = Self(9);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 10;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::OBJECT => "object",
            Self::BOOL => "bool",
            Self::CHAR => "char",
            Self::INT => "int",
            Self::LONG => "long",
            Self::DOUBLE => "double",
            Self::STRING => "string",
            Self::VOID => "void",
            Self::DYNAMIC => "dynamic",
            Self::ERROR => "<error>",
            _ => return write!(f, "TypeId({})", self.0),
        };
        f.write_str(name)
    }
}

/// Structure of one interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Primitive,
    Dynamic,
    Error,
    /// A class, struct or interface identified by name.
    Named(Name),
    /// Single- or multi-dimensional array.
    Array { element: TypeId, rank: u32 },
    /// Delegate type; `invoke` is its signature method.
    Delegate { name: Name, invoke: SymbolId },
    /// Tuple type with positional element types.
    Tuple(Vec<TypeId>),
}

static UNKNOWN: TypeKind = TypeKind::Error;

/// Interning pool for types.
#[derive(Clone, Debug)]
pub struct TypePool {
    kinds: Vec<TypeKind>,
    lookup: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        let mut kinds = Vec::with_capacity(TypeId::PRIMITIVE_COUNT as usize + 16);
        for _ in 0..8 {
            kinds.push(TypeKind::Primitive);
        }
        kinds.push(TypeKind::Dynamic);
        kinds.push(TypeKind::Error);
        Self {
            kinds,
            lookup: FxHashMap::default(),
        }
    }

    /// Intern a compound type.
    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.lookup.get(&kind) {
            return id;
        }
        let raw = u32::try_from(self.kinds.len())
            .unwrap_or_else(|_| panic!("type pool exceeded u32::MAX entries"));
        let id = TypeId::from_raw(raw);
        self.kinds.push(kind.clone());
        self.lookup.insert(kind, id);
        id
    }

    pub fn named(&mut self, name: Name) -> TypeId {
        self.intern(TypeKind::Named(name))
    }

    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeKind::Array { element, rank: 1 })
    }

    pub fn delegate(&mut self, name: Name, invoke: SymbolId) -> TypeId {
        self.intern(TypeKind::Delegate { name, invoke })
    }

    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.intern(TypeKind::Tuple(elements))
    }

    /// Structure of a type. Unknown ids read as the error type.
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        self.kinds.get(id.index()).unwrap_or(&UNKNOWN)
    }

    pub fn is_delegate(&self, id: TypeId) -> bool {
        matches!(self.kind(id), TypeKind::Delegate { .. })
    }

    pub fn is_error(&self, id: TypeId) -> bool {
        matches!(self.kind(id), TypeKind::Error)
    }

    /// Element type of an array type.
    pub fn element_type(&self, id: TypeId) -> Option<TypeId> {
        match self.kind(id) {
            TypeKind::Array { element, .. } => Some(*element),
            _ => None,
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
