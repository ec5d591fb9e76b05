// crates/datex2-rs/src/options.rs

//! Parse-time configuration threaded through every resolver.

use crate::types::code_list::CodeListRegistry;

/// How code-list tokens outside the known set are treated.
#[derive(Debug, Clone, Copy, Default)]
pub enum CodeListPolicy<'a> {
    /// Any non-empty token is accepted. Unknown tokens are kept verbatim.
    #[default]
    Open,
    /// Only known tokens, plus tokens registered in `extensions`, are accepted.
    Strict {
        extensions: Option<&'a CodeListRegistry>,
    },
}

/// How child elements without a namespace are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamespacePolicy {
    /// Unqualified children match by local name.
    #[default]
    AllowUnqualified,
    /// Children must carry the exact DATEX II namespace.
    Strict,
}

/// Options for parsing DATEX II content.
///
/// The default is lenient: open code lists and unqualified children allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    pub code_lists: CodeListPolicy<'a>,
    pub namespaces: NamespacePolicy,
}

impl<'a> ParseOptions<'a> {
    /// Strict code lists and strict namespaces, with optional registered extensions.
    pub fn strict(extensions: Option<&'a CodeListRegistry>) -> Self {
        Self {
            code_lists: CodeListPolicy::Strict { extensions },
            namespaces: NamespacePolicy::Strict,
        }
    }

    pub fn with_code_lists(mut self, policy: CodeListPolicy<'a>) -> Self {
        self.code_lists = policy;
        self
    }

    pub fn with_namespaces(mut self, policy: NamespacePolicy) -> Self {
        self.namespaces = policy;
        self
    }

    pub(crate) fn allow_unqualified(&self) -> bool {
        self.namespaces == NamespacePolicy::AllowUnqualified
    }
}
