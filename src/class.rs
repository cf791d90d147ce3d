//! Class manifests: the declared capability set a mock is generated from.

use crate::{MockError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reserved recorder key for the construction path.
pub const CONSTRUCTOR_KEY: &str = "constructor";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Constructor,
    #[default]
    Method,
    /// Getter or setter. Never mocked.
    Accessor,
    /// Declared on the type rather than its instances. Never mocked.
    Static,
}

/// A declared parameter. The type is only used when generating source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    /// Declared on an ancestor rather than on this class.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inherited: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl Member {
    fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inherited: false,
            params: Vec::new(),
            returns: None,
        }
    }

    fn is_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor || self.name == CONSTRUCTOR_KEY
    }
}

/// The input of mock generation: a class name plus its ordered member listing.
///
/// `members == None` stands for a type whose members cannot be listed. Such a
/// definition deserializes fine but fails at introspection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

impl ClassDefinition {
    /// An introspectable class with no members yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Some(Vec::new()),
        }
    }

    /// A type without an accessible member listing.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: None,
        }
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.get_or_insert_with(Vec::new).push(member);
        self
    }

    pub fn constructor(self) -> Self {
        self.constructor_with(Vec::new())
    }

    pub fn constructor_with(self, params: Vec<Param>) -> Self {
        let mut member = Member::new(CONSTRUCTOR_KEY, MemberKind::Constructor);
        member.params = params;
        self.member(member)
    }

    pub fn method(self, name: impl Into<String>) -> Self {
        self.member(Member::new(name, MemberKind::Method))
    }

    pub fn method_with(
        self,
        name: impl Into<String>,
        params: Vec<Param>,
        returns: Option<String>,
    ) -> Self {
        let mut member = Member::new(name, MemberKind::Method);
        member.params = params;
        member.returns = returns;
        self.member(member)
    }

    /// A method reached through an ancestor.
    pub fn inherited(self, name: impl Into<String>) -> Self {
        let mut member = Member::new(name, MemberKind::Method);
        member.inherited = true;
        self.member(member)
    }

    pub fn accessor(self, name: impl Into<String>) -> Self {
        self.member(Member::new(name, MemberKind::Accessor))
    }

    pub fn static_method(self, name: impl Into<String>) -> Self {
        self.member(Member::new(name, MemberKind::Static))
    }

    /// Members declared directly on the class, in declaration order.
    pub fn own_members(&self) -> Result<Vec<&Member>> {
        let members = self.members.as_ref().ok_or_else(|| {
            MockError::ConfigurationError(format!(
                "`{}` exposes no member listing",
                self.name
            ))
        })?;

        let mut seen = HashSet::new();
        for member in members.iter().filter(|m| !m.inherited) {
            if member.name.trim().is_empty() {
                return Err(MockError::ConfigurationError(format!(
                    "`{}` declares a member with an empty name",
                    self.name
                )));
            }
            // Statics live on the type, so they may share a name with an
            // instance member.
            let is_static = member.kind == MemberKind::Static;
            if !seen.insert((is_static, member.name.as_str())) {
                return Err(MockError::ConfigurationError(format!(
                    "`{}` declares `{}` more than once",
                    self.name, member.name
                )));
            }
        }

        Ok(members.iter().filter(|m| !m.inherited).collect())
    }

    /// Own instance method names in declaration order, without the
    /// construction member, accessors or statics.
    pub fn own_method_names(&self) -> Result<Vec<&str>> {
        Ok(self
            .own_members()?
            .into_iter()
            .filter(|m| m.kind == MemberKind::Method && !m.is_constructor())
            .map(|m| m.name.as_str())
            .collect())
    }

    /// Own instance methods with their signature data.
    pub fn own_methods(&self) -> Result<Vec<&Member>> {
        Ok(self
            .own_members()?
            .into_iter()
            .filter(|m| m.kind == MemberKind::Method && !m.is_constructor())
            .collect())
    }

    /// The declared construction member, if any.
    pub fn constructor_member(&self) -> Result<Option<&Member>> {
        Ok(self
            .own_members()?
            .into_iter()
            .find(|m| m.is_constructor()))
    }
}

/// A statically declared capability set.
///
/// `mock_class!` implements this for `dyn Trait`, which lets
/// [`crate::MockGenerator::of`] build a generator without a hand-written
/// manifest.
pub trait Mockable {
    fn class_definition() -> ClassDefinition;
}
