//! UI rendering

use focusfi_core::home::APP_TITLE;
use focusfi_core::{
    DailyHours, FocusCategory, HomeScreen, OnboardingWizard, Phase, Screen, WizardStep,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Main draw function
pub fn draw(f: &mut Frame, shell: &focusfi_core::AppShell) {
    match shell.screen() {
        Screen::Welcome => draw_welcome(f),
        Screen::Onboarding(wizard) => draw_onboarding(f, wizard),
        Screen::Home(home) => draw_home(f, home),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
}

fn draw_welcome(f: &mut Frame) {
    let area = centered(f.area(), 56, 16);
    let dot = |color: Color| Span::styled("● ", Style::default().fg(color));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to FocusFi!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "Your personal AI coach for productivity",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![dot(Color::Cyan), Span::raw("Smart Pomodoro Timer")]),
        Line::from(vec![dot(Color::Magenta), Span::raw("AI-Powered Motivation")]),
        Line::from(vec![dot(Color::Yellow), Span::raw("Focus Analytics")]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Start Focus Journey",
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Join thousands who've improved their focus",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled("[q] quit", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card(""));
    f.render_widget(paragraph, area);
}

fn draw_onboarding(f: &mut Frame, wizard: &OnboardingWizard) {
    let area = centered(f.area(), 60, 18);
    let state = wizard.state();
    let step = wizard.step();

    let dots: Vec<Span> = (1..=3)
        .map(|i| {
            let color = if i <= step.number() { Color::Cyan } else { Color::DarkGray };
            Span::styled("● ", Style::default().fg(color))
        })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled("Tell us about you!", Style::default().bold())),
        Line::from(dots),
        Line::from(""),
        Line::from(Span::styled(step.question(), Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];

    match step {
        WizardStep::Step1 => {
            for (i, option) in FocusCategory::ALL.iter().enumerate() {
                let selected = state.focus == Some(*option);
                lines.push(radio(
                    selected,
                    &format!("{} {}  {}", i + 1, option.icon(), option.label()),
                ));
            }
        }
        WizardStep::Step2 => {
            lines.push(radio(state.motivation, "⚡ Yes, keep me motivated!"));
            lines.push(radio(!state.motivation, "🎯 No, just track my focus"));
        }
        WizardStep::Step3 => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}", state.daily_hours),
                    Style::default().fg(Color::Cyan).bold(),
                ),
                Span::raw(" hours"),
            ]));
        }
    }

    let button_style = if wizard.can_advance() {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Question
            Constraint::Length(3), // Slider
            Constraint::Length(2), // Button
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)),
        chunks[0],
    );

    if step == WizardStep::Step3 {
        let ratio = (state.daily_hours - DailyHours::MIN) / (DailyHours::MAX - DailyHours::MIN);
        let slider = Gauge::default()
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio.clamp(0.0, 1.0))
            .label("1 hour  ←/→  12 hours");
        f.render_widget(slider, chunks[1]);
    } else {
        f.render_widget(
            Block::default().borders(Borders::LEFT | Borders::RIGHT),
            chunks[1],
        );
    }

    let button = Paragraph::new(Line::from(Span::styled(
        format!("[Enter] {} ›", wizard.advance_label()),
        button_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT));
    f.render_widget(button, chunks[2]);
}

fn radio(selected: bool, label: &str) -> Line<'static> {
    let marker = if selected { "(•) " } else { "( ) " };
    let style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{marker}{label}"), style))
}

fn draw_home(f: &mut Frame, home: &HomeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, home, chunks[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(5)])
        .split(cols[0]);
    draw_timer(f, home, main[0]);
    if let Some(quote) = home.view.quote {
        let card_body = Paragraph::new(vec![
            Line::from(Span::styled("Daily Motivation", Style::default().fg(Color::Yellow).bold())),
            Line::from(Span::styled(
                format!("\"{quote}\""),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(card(" ⚡ "));
        f.render_widget(card_body, main[1]);
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(cols[1]);
    draw_goal(f, home, side[0]);
    draw_stats(f, home, side[1]);
    draw_achievement(f, home, side[2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Space] start/pause  [r] reset  [s] settings  [q] quit",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(footer, chunks[2]);
}

fn draw_header(f: &mut Frame, home: &HomeScreen, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {APP_TITLE} "), Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", home.view.avatar_initial),
            Style::default().fg(Color::Black).bg(Color::Magenta).bold(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn draw_timer(f: &mut Frame, home: &HomeScreen, area: Rect) {
    let engine = home.timer.engine();
    let phase_color = match engine.phase() {
        Phase::Focus => Color::Cyan,
        Phase::Break => Color::Green,
    };
    let icon = match engine.phase() {
        Phase::Focus => "●",
        Phase::Break => "☕",
    };
    let control = if engine.is_running() {
        "Pause"
    } else if engine.is_fresh() {
        "Start"
    } else {
        "Resume"
    };

    let block = card(" Timer ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status and time
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Percent
            Constraint::Length(2), // Controls
            Constraint::Min(0),    // Message
        ])
        .split(inner);

    let status = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(phase_color)),
            Span::styled(engine.phase().label(), Style::default().bold()),
        ]),
        Line::from(Span::styled(
            format!(
                "Session {} • {} min focused today",
                engine.current_session_number(),
                engine.focused_minutes()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            engine.formatted_remaining(),
            Style::default().fg(phase_color).bold(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(status, rows[0]);

    let progress = engine.progress_percent();
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(phase_color))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(""),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(format!("{}% complete", progress.round()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("[Space] {control}"), Style::default().bold()),
            Span::raw("   "),
            Span::raw("[r] ↺"),
        ]))
        .alignment(Alignment::Center),
        rows[3],
    );

    if let Some(message) = engine.status_message() {
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(phase_color)),
            rows[4],
        );
    }
}

fn draw_goal(f: &mut Frame, home: &HomeScreen, area: Rect) {
    let view = &home.view;
    let block = card(" Today's Goal ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(view.goal_heading(), Style::default().bold())),
            Line::from(Span::styled(
                format!("{} hours target", view.daily_hours),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!("Progress {}%", view.goal_progress_percent.round())),
        rows[1],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(view.goal_progress_percent / 100.0)
            .label(""),
        rows[2],
    );
    f.render_widget(
        Paragraph::new(view.goal_line())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn draw_stats(f: &mut Frame, home: &HomeScreen, area: Rect) {
    let stats = &home.view.stats;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:>4}", stats.day_streak), Style::default().fg(Color::Cyan).bold()),
            Span::raw(" Day Streak   "),
            Span::styled(format!("{:>4}", stats.sessions), Style::default().fg(Color::Green).bold()),
            Span::raw(" Sessions"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(stats.week_label(), Style::default().fg(Color::Yellow).bold()),
            Span::raw(" This Week"),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(card(" Quick Stats ")), area);
}

fn draw_achievement(f: &mut Frame, home: &HomeScreen, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Achievement Unlocked!",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Span::styled(
            format!("Completed {} days in a row 🔥", home.view.stats.day_streak),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card(" 🏆 ")),
        area,
    );
}
