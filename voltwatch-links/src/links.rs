//! Hypermedia Links
//!
//! Every report response carries the links a client needs to move around the
//! calendar without building URLs itself:
//!
//! | rel          | target                               |
//! |--------------|--------------------------------------|
//! | `self`       | the requested Period                 |
//! | `up`         | parent unit (absent for `fiveyear`)  |
//! | `prev`       | unit before the span                 |
//! | `next`       | unit after the span                  |
//! | `collection` | child units (absent for `instant`)   |
//!
//! The href of a Period is `<base_path>/<granularity>/<compact start>`,
//! plus `?duration=N` when the span is longer than one unit. Feeding an href
//! back through [`PeriodRequest`](crate::PeriodRequest) yields the same span.

use serde::Serialize;
use voltwatch_core::{Period, Relation, RenderHint};

use crate::config::LinkConfig;

/// One serialized link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodLink {
    pub rel: Relation,
    pub href: String,
    /// Human label of the target
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderHint>,
    /// Navigation context of the target, e.g. `week.day`
    pub name: String,
}

/// Builds [`PeriodLink`]s under one base path
#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    config: &'a LinkConfig,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(config: &'a LinkConfig) -> Self {
        Self { config }
    }

    pub fn href(&self, period: &Period) -> String {
        let mut href = format!(
            "{}/{}/{}",
            self.config.base_path,
            period.granularity(),
            period.compact_start()
        );
        if period.duration() > 1 {
            href.push_str(&format!("?duration={}", period.duration()));
        }
        href
    }

    /// Link to `period` using its own relation and render hint
    pub fn link(&self, period: &Period) -> PeriodLink {
        let render = match period.render_hint() {
            RenderHint::None => None,
            hint => Some(hint),
        };

        PeriodLink {
            rel: period.relation(),
            href: self.href(period),
            prompt: period.label(),
            render,
            name: period.context().to_string(),
        }
    }

    /// Navigation links in `self, up, prev, next, collection` order
    pub fn links(&self, period: &Period) -> Vec<PeriodLink> {
        let (prev, next) = period.siblings();

        let mut links = Vec::with_capacity(5);
        links.push(PeriodLink { rel: Relation::Current, ..self.link(period) });
        if let Some(parent) = period.parent() {
            links.push(self.link(&parent));
        }
        links.push(self.link(&prev));
        links.push(self.link(&next));
        if let Some(child) = period.child() {
            links.push(self.link(&child));
        }

        log::debug!("built {} links for {}", links.len(), self.href(period));
        links
    }

    /// One link per child unit, in order; empty for `instant`
    pub fn collection_items(&self, period: &Period) -> Vec<PeriodLink> {
        period.each_child_unit().map(|unit| self.link(&unit)).collect()
    }
}
