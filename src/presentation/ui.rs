use crate::application::{App, AppMode};
use crate::domain::{ChecklistItem, Status, Topic};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

/// Display decoration for a status.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Done => "✅",
        Status::NotDone => "❌",
        Status::NotApplicable => "➖",
    }
}

enum DisplayLine<'a> {
    Topic(Topic),
    Item { position: usize, item: &'a ChecklistItem },
}

fn display_lines(app: &App) -> Vec<DisplayLine<'_>> {
    let mut lines = Vec::new();
    let mut current_topic = None;
    // display_indices is already grouped by topic, so a topic header goes
    // in whenever the topic changes
    for (position, index) in app.checklist.display_indices().into_iter().enumerate() {
        if let Some(item) = app.checklist.item(index) {
            if current_topic != Some(item.topic) {
                current_topic = Some(item.topic);
                lines.push(DisplayLine::Topic(item.topic));
            }
            lines.push(DisplayLine::Item { position, item });
        }
    }
    lines
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_checklist(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let company = app.company.as_deref().unwrap_or("(nenhuma empresa)");
    let header = Paragraph::new(format!(
        "tckl - Checklist de Implantação | Empresa: {} | {}/{}",
        company,
        app.checklist.done_count(),
        app.checklist.len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_checklist(f: &mut Frame, app: &App, area: Rect) {
    let visible_lines = area.height.saturating_sub(2) as usize;
    let lines = display_lines(app);

    // Scroll is tracked in item units; find the first visible line from the
    // first visible item, backing up one line so the topic header of a
    // group's first task stays on screen.
    let mut start_line = 0;
    for (i, line) in lines.iter().enumerate() {
        if let DisplayLine::Item { position, .. } = line {
            if *position == app.scroll {
                start_line = i.saturating_sub(1);
                break;
            }
        }
    }

    let mut rows = Vec::new();
    for line in lines.iter().skip(start_line).take(visible_lines) {
        match line {
            DisplayLine::Topic(topic) => {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                rows.push(Row::new(vec![
                    Cell::from(topic.label()).style(style),
                    Cell::from(""),
                ]));
            }
            DisplayLine::Item { position, item } => {
                let style = if *position == app.selected {
                    Style::default().bg(Color::Blue).fg(Color::White)
                } else {
                    Style::default()
                };
                let status_text = format!("{} {}", status_icon(item.status), item.status.label());
                rows.push(Row::new(vec![
                    Cell::from(status_text).style(style),
                    Cell::from(item.task.as_str()).style(style),
                ]));
            }
        }
    }

    let widths = [Constraint::Length(18), Constraint::Min(20)];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Checklist"))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Espaço: alterar status | 1/2/3: status direto | s: salvar | r: zerar | \
                 c: empresa | Tab: próxima empresa | Ctrl+S/Ctrl+O: sessão | \
                 Ctrl+E/Ctrl+I: CSV | F1/?: ajuda | q: sair"
                    .to_string()
            }
        }
        AppMode::Company => format!(
            "Empresa: {} (Enter para confirmar, Esc para cancelar)",
            app.company_input
        ),
        AppMode::Help => {
            "↑↓/jk: rolar | PgUp/PgDn: rolagem rápida | Home: início | Esc/q: fechar ajuda"
                .to_string()
        }
        AppMode::SaveSession => format!(
            "Salvar sessão em: {} (Enter para salvar, Esc para cancelar)",
            app.filename_input
        ),
        AppMode::LoadSession => format!(
            "Carregar sessão de: {} (Enter para carregar, Esc para cancelar)",
            app.filename_input
        ),
        AppMode::ExportCsv => format!(
            "Exportar CSV para: {} (Enter para exportar, Esc para cancelar)",
            app.filename_input
        ),
        AppMode::ImportCsv => format!(
            "Importar CSV de: {} (Enter para importar, Esc para cancelar)",
            app.filename_input
        ),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Company => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::SaveSession => Style::default().fg(Color::Yellow),
            AppMode::LoadSession => Style::default().fg(Color::Yellow),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
            AppMode::ImportCsv => Style::default().fg(Color::Green),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "tckl Ajuda (Linha {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"CHECKLIST DE IMPLANTAÇÃO

=== CONCEITOS ===
• Cada empresa tem seu próprio checklist, criado já preenchido com o
  catálogo completo de tarefas (todas como FALSE).
• As tarefas são agrupadas por fase: Pré-Instalação, Instalação e
  Pós-Instalação. A Pré-Instalação aparece sempre primeiro.
• Cada tarefa tem um status: ✅ TRUE, ❌ FALSE ou ➖ NÃO SE APLICA.

=== NAVEGAÇÃO ===
↑/k             Tarefa anterior
↓/j             Próxima tarefa
PgUp/PgDn       Pular 5 tarefas
Home/End        Primeira/última tarefa

=== STATUS ===
Espaço/Enter    Alternar status (TRUE → FALSE → NÃO SE APLICA)
1               Marcar como TRUE
2               Marcar como FALSE
3               Marcar como NÃO SE APLICA

=== EMPRESAS ===
c               Selecionar ou adicionar empresa
Tab             Próxima empresa cadastrada

Ao trocar de empresa o progresso atual é mantido na sessão.

=== PROGRESSO ===
s               Salvar progresso da empresa atual
r               Zerar checklist da empresa atual (tudo volta a FALSE)

=== SESSÃO (todas as empresas) ===
Ctrl+S          Salvar sessão em arquivo JSON
Ctrl+O          Carregar sessão de arquivo JSON

=== ARQUIVO CSV (empresa atual) ===
Ctrl+E          Exportar checklist para CSV
Ctrl+I/Ctrl+L   Importar checklist de CSV

O arquivo CSV tem três colunas obrigatórias: Tópico, Tarefas e
Concluído. A ordem das colunas não importa; colunas extras são
ignoradas. Um status desconhecido é lido como FALSE; uma coluna
obrigatória ausente interrompe a importação com erro de formato.

=== GERAL ===
F1/?            Esta ajuda
q               Sair (no modo normal)
"#
    .to_string()
}
