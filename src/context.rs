//! Application Context
//!
//! Transient notices shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use packing_core::{Notice, NOTICE_AUTO_CLOSE_MS};

/// Toast state provided via context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    /// Notice currently on screen - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice currently on screen - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Bumped per notice so an old timer cannot close a newer one
    generation: RwSignal<u32>,
}

impl NoticeContext {
    pub fn new() -> Self {
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            notice,
            set_notice,
            generation: RwSignal::new(0),
        }
    }

    /// Show a notice and close it after `NOTICE_AUTO_CLOSE_MS`
    pub fn show(&self, notice: Notice) {
        tracing::info!(text = %notice.message, "notice shown");
        self.generation.update(|g| *g += 1);
        let shown = self.generation.get_untracked();
        self.set_notice.set(Some(notice));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_AUTO_CLOSE_MS).await;
            if ctx.generation.get_untracked() == shown {
                ctx.dismiss();
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notice context
pub fn use_notices() -> NoticeContext {
    expect_context::<NoticeContext>()
}
