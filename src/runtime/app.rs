use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::allocator::IdAllocator;
use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg, RequestId};
use crate::model::BoardModel;
use crate::update::update;

/// Single-writer event loop around a [`BoardModel`]
///
/// Messages from the presentation layer go through [`App::dispatch`]; results
/// of asynchronous commands arrive on an internal channel and are applied by
/// [`App::process_async_messages`] or [`App::wait_idle`].
pub struct App {
    model: BoardModel,
    allocator: Arc<dyn IdAllocator>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    next_request: u64,
    outstanding: HashSet<RequestId>,
}

impl App {
    pub fn new(model: BoardModel, allocator: Arc<dyn IdAllocator>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            allocator,
            msg_tx,
            msg_rx,
            next_request: 0,
            outstanding: HashSet::new(),
        }
    }

    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    pub fn into_model(self) -> BoardModel {
        self.model
    }

    /// Handle for raising messages from another thread
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Id requests sent to the allocator and not yet answered
    pub fn pending_allocations(&self) -> usize {
        self.outstanding.len()
    }

    /// Run one message through update and execute the resulting command
    ///
    /// Returns whether the view needs to be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        // Answers to requests this runtime never issued are applied but not counted
        if let Msg::App(AppMsg::IdAllocated { request, .. }) = &msg {
            self.outstanding.remove(request);
        }

        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::AllocateId(pending) => {
                let request = RequestId(self.next_request);
                self.next_request += 1;
                self.outstanding.insert(request);
                let tx = self.msg_tx.clone();
                let allocator = Arc::clone(&self.allocator);
                std::thread::spawn(move || {
                    let id = allocator.allocate();
                    tracing::trace!(?request, id, "id allocated");
                    let _ = tx.send(Msg::App(AppMsg::IdAllocated {
                        request,
                        id,
                        pending,
                    }));
                });
            }
        }
    }

    /// Apply every message already waiting on the channel
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if self.dispatch(msg) {
                needs_redraw = true;
            }
        }
        needs_redraw
    }

    /// Block until every outstanding id request has been applied
    pub fn wait_idle(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        let mut needs_redraw = false;

        while !self.outstanding.is_empty() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    if self.dispatch(msg) {
                        needs_redraw = true;
                    }
                }
                Err(RecvTimeoutError::Timeout) => bail!(
                    "timed out after {:?} with {} id request(s) outstanding",
                    timeout,
                    self.outstanding.len()
                ),
                Err(RecvTimeoutError::Disconnected) => bail!("message channel closed"),
            }
        }

        if self.process_async_messages() {
            needs_redraw = true;
        }
        Ok(needs_redraw)
    }
}
