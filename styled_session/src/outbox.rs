// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use span_store::Span;

/// Opaque identifier of an [`UpdateBatch`].
///
/// Obtained from [`UpdateBatch::id`] and handed back to
/// [`StyledSession::complete_updates`](crate::StyledSession::complete_updates).
// Ids wrap after `u32::MAX` batches; only the in-flight id is ever compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BatchId(u32);

impl BatchId {
    fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// One instruction for the host's text view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeUpdate {
    /// The range to update and the attributes concerned.
    pub span: Span,
    /// `true` to apply `span.attributes` over `span.range`; `false` to strip every attribute
    /// from that range first.
    pub apply: bool,
}

impl AttributeUpdate {
    pub(crate) fn applying(span: Span) -> Self {
        Self { span, apply: true }
    }

    pub(crate) fn clearing(range: core::ops::Range<usize>) -> Self {
        Self {
            span: Span::plain(range),
            apply: false,
        }
    }
}

/// The updates produced by one operation, applied by the host in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateBatch {
    id: BatchId,
    updates: Vec<AttributeUpdate>,
}

impl UpdateBatch {
    /// The id to acknowledge once the host has applied the batch.
    #[inline]
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// The updates, in application order.
    #[inline]
    pub fn updates(&self) -> &[AttributeUpdate] {
        &self.updates
    }
}

/// Render updates waiting for the host.
///
/// At most one batch is in flight at a time; later batches queue up behind it in FIFO order
/// and the next one is handed out when the host acknowledges the current one.
#[derive(Clone, Debug, Default)]
pub(crate) struct UpdateOutbox {
    last_id: BatchId,
    in_flight: Option<UpdateBatch>,
    backlog: VecDeque<UpdateBatch>,
}

impl UpdateOutbox {
    /// Queues `updates` as a new batch and returns its id.
    pub(crate) fn push(&mut self, updates: Vec<AttributeUpdate>) -> BatchId {
        self.last_id.nudge();
        let batch = UpdateBatch {
            id: self.last_id,
            updates,
        };
        if self.in_flight.is_none() {
            self.in_flight = Some(batch);
        } else {
            self.backlog.push_back(batch);
        }
        self.last_id
    }

    pub(crate) fn pending(&self) -> Option<&UpdateBatch> {
        self.in_flight.as_ref()
    }

    /// Retires the in-flight batch if its id is `id`, promoting the next queued batch.
    pub(crate) fn complete(&mut self, id: BatchId) -> bool {
        if self.in_flight.as_ref().is_none_or(|batch| batch.id != id) {
            log::debug!("ignoring completion of {id:?}, not in flight");
            return false;
        }
        self.in_flight = self.backlog.pop_front();
        true
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Number of batches not yet acknowledged, the in-flight one included.
    pub(crate) fn len(&self) -> usize {
        self.backlog.len() + usize::from(self.in_flight.is_some())
    }
}
