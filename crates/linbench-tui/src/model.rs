//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use linbench_core::progress::{BatchProgress, ExecutionMode};
use linbench_core::system::LinearSystem;
use linbench_core::RunConfig;
use linbench_orchestration::interfaces::ModeReport;

use crate::chart::render_duration_charts;
use crate::controls::{render_controls, Controls};
use crate::footer::render_footer;
use crate::gauges::render_gauges;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState};
use crate::messages::TuiMessage;
use crate::metrics::render_metrics;
use crate::report::render_report;
use crate::system_view::render_system;

/// Log lines kept before the oldest are discarded.
const LOG_CAP: usize = 500;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Editable parameter controls.
    pub controls: Controls,
    /// Whether a benchmark run is in flight.
    pub running: bool,
    /// System generated for the current run.
    pub system: Option<LinearSystem>,
    /// Sequential-mode progress for the current run.
    pub sequential_progress: Option<BatchProgress>,
    /// Parallel-mode progress for the current run.
    pub parallel_progress: Option<BatchProgress>,
    /// Sequential-mode report, once complete.
    pub sequential_report: Option<ModeReport>,
    /// Parallel-mode report, once complete.
    pub parallel_report: Option<ModeReport>,
    /// Log messages.
    pub logs: Vec<String>,
    /// Log scroll state.
    pub log_scroll: LogScrollState,
    /// Show logs toggle.
    pub show_logs: bool,
    /// Error messages.
    pub errors: Vec<String>,
    /// Current CPU usage.
    pub cpu_percent: f64,
    /// Current memory usage in MB.
    pub memory_mb: f64,
    /// Start time of the current run.
    pub start_time: Option<Instant>,
    /// Elapsed time frozen when the run finished.
    pub frozen_elapsed: Option<Duration>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Run counter for message filtering.
    generation: u64,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Trigger channel into the benchmark controller.
    run_tx: Sender<RunConfig>,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, run_tx: Sender<RunConfig>) -> Self {
        Self {
            should_quit: false,
            controls: Controls::default(),
            running: false,
            system: None,
            sequential_progress: None,
            parallel_progress: None,
            sequential_report: None,
            parallel_report: None,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_logs: true,
            errors: Vec::new(),
            cpu_percent: 0.0,
            memory_mb: 0.0,
            start_time: None,
            frozen_elapsed: None,
            terminal_width: 80,
            terminal_height: 24,
            generation: 0,
            rx,
            run_tx,
        }
    }

    /// Current run counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::RunStarted(config) => {
                self.running = true;
                self.generation += 1;
                self.start_time = Some(Instant::now());
                self.frozen_elapsed = None;
                self.system = None;
                self.sequential_progress = None;
                self.parallel_progress = None;
                self.sequential_report = None;
                self.parallel_report = None;
                self.errors.clear();
                self.push_log(format!(
                    "Run started: n={}, k={}, workers={}",
                    config.dimension, config.repetitions, config.workers
                ));
            }
            TuiMessage::SystemGenerated(system) => {
                self.system = Some(system);
            }
            TuiMessage::Progress(progress) => match progress.mode {
                ExecutionMode::Sequential => self.sequential_progress = Some(progress),
                ExecutionMode::Parallel => self.parallel_progress = Some(progress),
            },
            TuiMessage::ModeComplete(report) => match report.mode {
                ExecutionMode::Sequential => self.sequential_report = Some(report),
                ExecutionMode::Parallel => self.parallel_report = Some(report),
            },
            TuiMessage::RunFinished => {
                self.running = false;
                self.frozen_elapsed = self.start_time.map(|t| t.elapsed());
            }
            TuiMessage::Log(line) => {
                self.push_log(line);
            }
            TuiMessage::Error(err) => {
                self.errors.push(err.clone());
                self.push_log(format!("[ERROR] {err}"));
            }
            TuiMessage::SystemMetrics(metrics) => {
                self.cpu_percent = metrics.cpu_percent;
                self.memory_mb = metrics.memory_mb;
            }
            TuiMessage::Tick => {
                // Tick only triggers a re-render.
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Run => {
                self.trigger_run();
            }
            KeyAction::NextField | KeyAction::PrevField => {
                // Two fields, so next and previous coincide.
                self.controls.focus_next();
            }
            KeyAction::Increment => self.controls.adjust(1),
            KeyAction::Decrement => self.controls.adjust(-1),
            KeyAction::IncrementBig => self.controls.adjust(10),
            KeyAction::DecrementBig => self.controls.adjust(-10),
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::ScrollUp => self.log_scroll.scroll_up(),
            KeyAction::ScrollDown => self.log_scroll.scroll_down(self.logs.len()),
            KeyAction::None => {}
        }
    }

    /// Send the current controls to the benchmark controller as one
    /// immutable configuration.
    fn trigger_run(&mut self) {
        if self.running {
            self.push_log("Run already in progress".to_string());
            return;
        }
        let config = self.controls.to_config();
        if self.run_tx.send(config).is_ok() {
            // RunStarted will arrive from the controller; flag eagerly so a
            // second Enter before that does not queue another run.
            self.running = true;
        } else {
            tracing::warn!("benchmark controller channel closed");
            self.push_log("[ERROR] benchmark controller is gone".to_string());
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > LOG_CAP {
            self.logs.remove(0);
            if self.log_scroll.offset > 0 {
                self.log_scroll.offset -= 1;
            }
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Elapsed time of the current or last run.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.frozen_elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
    }

    /// Compute the outer layout.
    ///
    /// Returns (header, controls, main, info, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // header
                Constraint::Length(3),      // controls
                Constraint::Min(10),        // main content
                Constraint::Length(7),      // info panel
                Constraint::Length(2),      // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3], outer[4])
    }

    /// Split the main area into the system/results column and the chart
    /// column.
    #[must_use]
    pub fn compute_main_layout(main: Rect) -> (Rect, Rect, Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(4)])
            .split(columns[0]);

        (left[0], left[1], columns[1])
    }

    /// Split the info area into metrics and logs.
    #[must_use]
    pub fn compute_info_layout(info: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(info);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, controls_area, main_area, info_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            self.controls.dimension,
            self.controls.repetitions,
        );
        render_controls(frame, controls_area, &self.controls, self.running);

        let (system_area, report_area, chart_area) = Self::compute_main_layout(main_area);
        render_system(frame, system_area, self.system.as_ref());
        render_report(
            frame,
            report_area,
            self.sequential_report.as_ref(),
            self.parallel_report.as_ref(),
        );

        if self.running {
            render_gauges(
                frame,
                chart_area,
                self.sequential_progress.as_ref(),
                self.parallel_progress.as_ref(),
            );
        } else {
            render_duration_charts(
                frame,
                chart_area,
                self.sequential_report.as_ref(),
                self.parallel_report.as_ref(),
            );
        }

        let elapsed_secs = self.elapsed().map_or(0.0, |d| d.as_secs_f64());
        if self.show_logs {
            let (metrics_area, logs_area) = Self::compute_info_layout(info_area);
            render_metrics(frame, metrics_area, elapsed_secs, self.memory_mb, self.cpu_percent);
            render_logs(frame, logs_area, &self.logs, self.log_scroll.offset);
        } else {
            render_metrics(frame, info_area, elapsed_secs, self.memory_mb, self.cpu_percent);
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
