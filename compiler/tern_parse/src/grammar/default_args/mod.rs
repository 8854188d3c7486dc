//! Default values for parameters.
//!
//! A default value is parsed before the function that owns it exists, so
//! its expression runs under a provisional `DefaultArgument` declaration
//! context. Contexts whose initializer contained no closure are destroyed
//! on the spot. The rest are kept in [`DefaultArgumentInfo`] until the
//! function is built and [`DefaultArgumentInfo::set_function_context`]
//! hands them over.

use smallvec::SmallVec;
use tern_ir::{DeclContextArena, DeclContextId, DeclContextKind, ExprId};
use tracing::debug;

use crate::error;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::recovery;
use crate::Parser;

/// Default-value bookkeeping for one signature. Not `Clone`: the retained
/// contexts have a single owner until the handoff consumes it.
#[derive(Debug, Default)]
pub struct DefaultArgumentInfo {
    next_index: u32,
    parsed_contexts: SmallVec<[DeclContextId; 4]>,
}

impl DefaultArgumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next parameter will get.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Contexts retained because their initializer contained a closure.
    pub fn retained_contexts(&self) -> &[DeclContextId] {
        &self.parsed_contexts
    }

    /// Draw the next positional index.
    pub(crate) fn claim_index(&mut self) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    fn retain(&mut self, context: DeclContextId) {
        self.parsed_contexts.push(context);
    }

    /// Reparent every retained context under `function`.
    ///
    /// Consumes the manager: after the handoff the function owns the
    /// contexts. Returns how many were moved.
    pub fn set_function_context(
        self,
        contexts: &mut DeclContextArena,
        function: DeclContextId,
    ) -> usize {
        for &context in &self.parsed_contexts {
            contexts.set_parent(context, function);
        }
        debug!(
            count = self.parsed_contexts.len(),
            ?function,
            "handed default-argument contexts to function"
        );
        self.parsed_contexts.len()
    }
}

impl Parser<'_> {
    /// Parse `= expr` for the parameter at `index`. The current token is `=`.
    ///
    /// Without a manager the value is diagnosed and discarded: the outcome
    /// has no value and a recovered status. A malformed value skips to the
    /// end of the parameter.
    pub(crate) fn parse_default_argument(
        &mut self,
        defaults: Option<&mut DefaultArgumentInfo>,
        index: u32,
    ) -> ParseOutcome<ExprId> {
        let eq = self.cursor.advance().span;
        let context = self
            .contexts
            .alloc(DeclContextKind::DefaultArgument { index }, self.decl_context);
        let closures_before = self.closure_count;

        let (init, status) = self
            .with_decl_context(context, Parser::parse_expr)
            .into_parts();

        let has_closures = self.closure_count != closures_before;
        let allowed = defaults.is_some();
        match defaults {
            Some(defaults) if has_closures => {
                debug!(index, ?context, "retained default-argument context");
                defaults.retain(context);
            }
            _ => {
                debug!(index, ?context, "discarded default-argument context");
                self.contexts.destroy(context);
            }
        }

        if !allowed {
            let removal = init.map(|id| eq.merge(self.arena.get(id).span));
            self.emit(error::default_outside_parameters(eq, removal));
        }

        if status.has_code_completion() {
            recovery::skip_malformed_default_value(&mut self.cursor);
            return ParseOutcome::code_completion();
        }
        if init.is_none() {
            recovery::skip_malformed_default_value(&mut self.cursor);
            return ParseOutcome::error();
        }
        if !allowed {
            return ParseOutcome::new(status | ParseStatus::Recovered, None);
        }
        ParseOutcome::new(status, init)
    }
}
