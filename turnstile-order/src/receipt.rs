use turnstile_shared::GuestEntry;

use crate::session::IssuedTicket;

/// Box-drawn text table with an `(index)` column, in the shape of a console table dump.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec!["(index)".to_string()];
        all.extend(headers.into_iter().map(Into::into));
        Self { headers: all, rows: Vec::new() }
    }

    /// Cells beyond the header count are dropped; missing cells render empty.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = vec![self.rows.len().to_string()];
        row.extend(cells.into_iter().map(Into::into));
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers[col])
                    .chain(self.rows.iter().map(|r| &r[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.headers));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }
}

impl IssuedTicket {
    /// Receipt printed after a successful intake.
    pub fn render(&self) -> String {
        let mut table = Table::new(["details", "Ticket Price (Rs)"]);
        for entry in &self.record().guests {
            table.push_row([entry.details.clone(), entry.ticket_price.to_string()]);
        }

        format!(
            "\n===== Ticket Details: {id} =====\n\n{table}Ticket ID: {id}\nTotal Price: {total} Rs\n",
            id = self.id(),
            table = table.render(),
            total = self.total_price(),
        )
    }
}

/// Guest listing shown by the verifier.
pub fn render_guest_list(guests: &[GuestEntry]) -> String {
    let mut table = Table::new(["details", "ticketPrice"]);
    for entry in guests {
        table.push_row([entry.details.clone(), entry.ticket_price.to_string()]);
    }
    table.render()
}
