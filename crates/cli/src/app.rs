//! Application wiring: store, navigation, screens, and the event loop.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use logbook_core::{EntityRepository, FileStore, KvStore, NavState};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::config::LogbookConfig;
use crate::message::MessageLog;
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::{MenuState, Screen};

const FRAME_INTERVAL_MS: u64 = 16;

/// Zero-argument "schedule a redraw" hook.
///
/// Handed to whatever changes observable state (controller mutations and
/// the background export task) so the event loop re-renders afterwards.
#[derive(Clone)]
pub struct RedrawHandle(mpsc::UnboundedSender<()>);

impl RedrawHandle {
    pub fn request_redraw(&self) {
        let _ = self.0.send(());
    }
}

/// Owns every piece of client state and coordinates the UI.
///
/// All mutations run on the event loop task; the export task only reads
/// through the shared repository and reports back over `download_rx`.
pub struct App<S: KvStore> {
    pub(crate) repo: Arc<EntityRepository<S>>,
    pub(crate) nav: NavState,
    pub(crate) screen: Screen,
    pub(crate) messages: MessageLog,
    pub(crate) redraw: RedrawHandle,
    pub(crate) download_tx: mpsc::UnboundedSender<String>,
    redraw_rx: mpsc::UnboundedReceiver<()>,
    download_rx: mpsc::UnboundedReceiver<String>,
}

impl App<FileStore> {
    pub fn new(config: &LogbookConfig) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::with_store(store, config.message_capacity))
    }
}

impl<S: KvStore + 'static> App<S> {
    pub fn with_store(store: S, message_capacity: usize) -> Self {
        let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
        let (download_tx, download_rx) = mpsc::unbounded_channel();

        Self {
            repo: Arc::new(EntityRepository::new(store)),
            nav: NavState::new(),
            screen: Screen::Menu(MenuState::default()),
            messages: MessageLog::new(message_capacity),
            redraw: RedrawHandle(redraw_tx),
            download_tx,
            redraw_rx,
            download_rx,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                Some(()) = self.redraw_rx.recv() => {
                    self.render(terminal)?;
                }
                Some(dump) = self.download_rx.recv() => {
                    self.deliver_download(dump);
                    self.render(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Poll for keyboard input; returns true when the user quit.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let quit = self.handle_key(key);
                self.render(terminal)?;
                Ok(quit)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn deliver_download(&mut self, dump: String) {
        if let Screen::Download(state) = &mut self.screen {
            state.data = Some(dump);
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                screen: &self.screen,
                messages: &self.messages,
            },
        )
    }
}
