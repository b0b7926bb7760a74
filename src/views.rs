//! Server-rendered HTML pages.
//!
//! Every value that originates from the catalog, the store or the request goes through
//! [`escape`] before it is written into markup.

use std::fmt::Write;

use crate::{
    catalog::Catalog,
    models::{Bill, SalesReport},
    session::Session,
};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn nav(session: Option<&Session>) -> String {
    match session {
        Some(s) => format!(
            "<nav>Logged in as <strong>{}</strong> ({}) | <a href=\"/\">Menu</a> | \
             <a href=\"/report\">Report</a> | <a href=\"/logout\">Logout</a></nav>",
            escape(&s.username),
            s.role
        ),
        None => "<nav><a href=\"/\">Menu</a> | <a href=\"/login\">Login</a></nav>".to_string(),
    }
}

pub fn menu_page(catalog: &Catalog, session: Option<&Session>) -> String {
    let mut rows = String::new();
    for item in catalog.items() {
        let name = escape(&item.name);
        let _ = writeln!(
            rows,
            "<tr><td>{name}</td><td>{price}</td>\
             <td><input type=\"number\" min=\"0\" name=\"{name}\" value=\"0\"></td></tr>",
            price = money(item.unit_price),
        );
    }

    let body = format!(
        "{nav}\n<h1>Menu</h1>\n<form method=\"post\" action=\"/bill\">\n<table>\n\
         <tr><th>Item</th><th>Price</th><th>Qty</th></tr>\n{rows}</table>\n\
         <p><label>Coupon <input type=\"text\" name=\"coupon\"></label></p>\n\
         <p>GST {gst}% applies to every order.</p>\n\
         <button type=\"submit\">Generate bill</button>\n</form>",
        nav = nav(session),
        gst = (catalog.tax_rate() * 100.0).round(),
    );
    layout("Menu", &body)
}

pub fn bill_page(bill: &Bill, session: Option<&Session>) -> String {
    let mut rows = String::new();
    for line in &bill.lines {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&line.item),
            line.quantity,
            money(line.line_cost)
        );
    }

    let coupon = match &bill.coupon {
        Some(c) => format!(
            "<tr><td colspan=\"2\">Discount ({})</td><td>-{}</td></tr>",
            escape(&c.code),
            money(bill.discount)
        ),
        None => format!(
            "<tr><td colspan=\"2\">Discount</td><td>-{}</td></tr>",
            money(bill.discount)
        ),
    };

    let body = format!(
        "{nav}\n<h1>Bill</h1>\n<table>\n<tr><th>Item</th><th>Qty</th><th>Cost</th></tr>\n{rows}\
         <tr><td colspan=\"2\">Subtotal</td><td>{subtotal}</td></tr>\n\
         <tr><td colspan=\"2\">GST</td><td>{tax}</td></tr>\n{coupon}\n\
         <tr><td colspan=\"2\"><strong>Total</strong></td><td><strong>{total}</strong></td></tr>\n\
         </table>\n<p><a href=\"/\">New order</a></p>",
        nav = nav(session),
        subtotal = money(bill.subtotal),
        tax = money(bill.tax),
        total = money(bill.final_total),
    );
    layout("Bill", &body)
}

pub fn login_page() -> String {
    let body = "<h1>Login</h1>\n<form method=\"post\" action=\"/login\">\n\
                <p><label>Username <input type=\"text\" name=\"username\"></label></p>\n\
                <p><label>Password <input type=\"password\" name=\"password\"></label></p>\n\
                <button type=\"submit\">Login</button>\n</form>\n<p><a href=\"/\">Menu</a></p>";
    layout("Login", body)
}

pub fn report_page(session: &Session, report: Option<&SalesReport>) -> String {
    let mut body = format!(
        "{nav}\n<h1>Sales report</h1>\n<form method=\"post\" action=\"/report\">\n\
         <label>Date <input type=\"text\" name=\"date\" placeholder=\"YYYY-MM-DD\"></label>\n\
         <button type=\"submit\">Show</button>\n</form>",
        nav = nav(Some(session)),
    );

    if let Some(report) = report {
        let _ = write!(
            body,
            "\n<h2>{date}</h2>\n<p>Orders: {orders}</p>\n<p>Total revenue: {revenue}</p>",
            date = escape(&report.date),
            orders = report.orders_count,
            revenue = money(report.total_revenue),
        );

        match &report.top_seller {
            Some(top) => {
                let _ = write!(
                    body,
                    "\n<p>Top seller: {} ({})</p>",
                    escape(&top.item),
                    top.total_quantity
                );
            }
            None => body.push_str("\n<p>No sales recorded for this date.</p>"),
        }

        if !report.per_item.is_empty() {
            body.push_str("\n<table>\n<tr><th>Item</th><th>Qty sold</th></tr>\n");
            for entry in &report.per_item {
                let _ = writeln!(
                    body,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape(&entry.item),
                    entry.total_quantity
                );
            }
            body.push_str("</table>");
        }
    }

    layout("Sales report", &body)
}

pub fn message_page(message: &str, href: &str, label: &str) -> String {
    let body = format!(
        "<p>{}</p>\n<p><a href=\"{}\">{}</a></p>",
        escape(message),
        escape(href),
        escape(label)
    );
    layout("Notice", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemSales, Role};

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn menu_lists_every_item_with_a_quantity_field() {
        let catalog = Catalog::default();
        let html = menu_page(&catalog, None);
        for item in catalog.items() {
            assert!(html.contains(&format!("name=\"{}\"", item.name)));
        }
        assert!(html.contains("name=\"coupon\""));
        assert!(html.contains("/login"));
    }

    #[test]
    fn bill_page_keeps_the_navigation() {
        let catalog = Catalog::default();
        let bill = crate::services::pricing_service::compute_bill(
            &catalog,
            &[crate::services::pricing_service::Selection {
                item: "Idly".into(),
                quantity: 2,
            }],
            None,
        )
        .expect("bill");

        let cashier = Session {
            username: "cashier".into(),
            role: Role::Cashier,
        };
        let html = bill_page(&bill, Some(&cashier));
        assert!(html.contains("Logged in as <strong>cashier</strong>"));
        assert!(html.contains("href=\"/logout\""));

        let anonymous = bill_page(&bill, None);
        assert!(anonymous.contains("href=\"/login\""));
        assert!(anonymous.contains("42.00"));
    }

    #[test]
    fn empty_report_says_so() {
        let session = Session {
            username: "admin".into(),
            role: Role::Admin,
        };
        let report = SalesReport {
            date: "2024-01-01".into(),
            orders_count: 0,
            total_revenue: 0.0,
            per_item: vec![],
            top_seller: None,
        };
        let html = report_page(&session, Some(&report));
        assert!(html.contains("Total revenue: 0.00"));
        assert!(html.contains("No sales recorded"));

        let top = ItemSales {
            item: "Dosa".into(),
            total_quantity: 3,
        };
        let report = SalesReport {
            per_item: vec![top.clone()],
            top_seller: Some(top),
            ..report
        };
        assert!(report_page(&session, Some(&report)).contains("Top seller: Dosa (3)"));
    }
}
