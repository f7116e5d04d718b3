// Page shell - static HTML with navigation, credit and a small fragment applier
use crate::application::render::html_escape;
use crate::domain::branding::{Credit, AUTHOR_BADGE_ID, AUTHOR_NAME_ID, DONATION_TITLE_ID};
use crate::domain::page::Page;

const SCRIPT: &str = r##"
const apply = (fragment) => {
  const section = document.getElementById('page-' + fragment.page);
  for (const { id, html } of fragment.targets) {
    let el = document.getElementById(id);
    if (!el && section) {
      const card = document.createElement('div');
      card.className = 'card';
      el = document.createElement('div');
      el.id = id;
      card.appendChild(el);
      section.appendChild(card);
    }
    if (el) el.innerHTML = html;
  }
};

const show = async (slug) => {
  document.querySelectorAll('.page').forEach((p) => p.hidden = p.id !== 'page-' + slug);
  document.querySelectorAll('.nav-item').forEach((n) => n.classList.toggle('active', n.dataset.page === slug));
  const res = await fetch('/pages/' + slug);
  if (res.ok) apply(await res.json());
};

const follow = async () => {
  try {
    const res = await fetch('/stream');
    if (!res.ok) return;
    const reader = res.body.getReader();
    const decoder = new TextDecoder();
    let buffered = '';
    for (;;) {
      const { value, done } = await reader.read();
      if (done) break;
      buffered += decoder.decode(value, { stream: true });
      let nl;
      while ((nl = buffered.indexOf('\n')) >= 0) {
        const line = buffered.slice(0, nl);
        buffered = buffered.slice(nl + 1);
        if (!line.trim()) continue;
        try { apply(JSON.parse(line)); } catch (err) { console.warn('bad fragment', err); }
      }
    }
  } catch (err) {
    console.warn('stream interrupted', err);
  } finally {
    setTimeout(follow, 3000);
  }
};

const sparkline = (values, max) => {
  if (!values.length) return '';
  const step = 300 / Math.max(values.length - 1, 1);
  const top = max || Math.max(...values, 1);
  const points = values.map((v, i) => `${(i * step).toFixed(1)},${(60 - (v / top) * 60).toFixed(1)}`).join(' ');
  return `<svg viewBox="0 0 300 60" preserveAspectRatio="none"><polyline fill="none" stroke="#2e5a8f" points="${points}"/></svg>`;
};

const bars = (series) => series.values.map((v, i) =>
  `<div class="bar-row"><span>${series.labels[i]}</span><div class="progress-bar"><div class="progress-fill" style="width: ${v}%"></div></div></div>`).join('');

const charts = async () => {
  if (document.hidden) return;
  const res = await fetch('/charts');
  if (!res.ok) return;
  const data = await res.json();
  const set = (id, html) => { const el = document.getElementById(id); if (el) el.innerHTML = html; };
  set('chart-cpu', sparkline(data.cpu, 100));
  set('chart-memory', sparkline(data.memory, 100));
  set('chart-network', sparkline(data.net_sent_mb) + sparkline(data.net_recv_mb));
  set('chart-cpu-cores', bars(data.cpu_cores));
  set('chart-gpu', bars(data.gpu));
};

const clock = async () => {
  const res = await fetch('/time');
  if (res.ok) document.getElementById('server-time').textContent = await res.text();
};

document.addEventListener('click', async (e) => {
  const nav = e.target.closest('.nav-item');
  if (nav) { e.preventDefault(); show(nav.dataset.page); return; }
  const header = e.target.closest('.partition-header');
  if (header) {
    const mp = header.dataset.mountpoint;
    const res = await fetch('/storage/toggle?mountpoint=' + encodeURIComponent(mp), { method: 'POST' });
    if (!res.ok) return;
    const fragment = await res.json();
    apply(fragment);
    for (const { id, html } of fragment.targets) {
      const el = document.getElementById(id);
      if (el) el.hidden = html === '';
    }
    return;
  }
  const exp = e.target.closest('[data-export]');
  if (exp) window.location = '/logs/export/' + exp.dataset.export;
});

document.addEventListener('visibilitychange', () => {
  fetch('/visibility', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ visible: !document.hidden }),
  });
});

show('overview');
follow();
setInterval(charts, 5000);
setInterval(clock, 1000);
"##;

/// Chart containers live in the shell; their series come from `/charts`.
fn chart_cards(page: Page) -> &'static str {
    match page {
        Page::Overview => concat!(
            r#"<div class="card"><h3>CPU History</h3><div id="chart-cpu" class="chart"></div></div>"#,
            r#"<div class="card"><h3>Memory History</h3><div id="chart-memory" class="chart"></div></div>"#,
            r#"<div class="card"><h3>Network (MB)</h3><div id="chart-network" class="chart"></div></div>"#,
        ),
        Page::Hardware => concat!(
            r#"<div class="card"><h3>CPU Cores</h3><div id="chart-cpu-cores" class="chart"></div></div>"#,
            r#"<div class="card"><h3>GPU</h3><div id="chart-gpu" class="chart"></div></div>"#,
        ),
        Page::Logs => concat!(
            r#"<div class="log-actions"><button data-export="syslog">Export syslog</button>"#,
            r#"<button data-export="auth">Export auth</button><button data-export="kern">Export kern</button></div>"#,
        ),
        _ => "",
    }
}

pub fn render(credit: &Credit) -> String {
    let nav: String = Page::ALL
        .iter()
        .map(|page| {
            format!(
                r##"<a href="#{slug}" class="nav-item" data-page="{slug}">{title}</a>"##,
                slug = page.slug(),
                title = html_escape(page.title())
            )
        })
        .collect();

    let sections: String = Page::ALL
        .iter()
        .map(|page| {
            format!(
                r#"<section id="page-{slug}" class="page"{hidden}><h2>{title}</h2>{charts}</section>"#,
                slug = page.slug(),
                hidden = if *page == Page::Overview { "" } else { " hidden" },
                title = html_escape(page.title()),
                charts = chart_cards(*page)
            )
        })
        .collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>System Dashboard</title>
</head>
<body>
<aside class="sidebar">
<div class="brand">System Dashboard <span id="{badge_id}" class="author-badge">{badge}</span></div>
<nav>{nav}</nav>
<div class="credit">Made by <span id="{name_id}">{author}</span></div>
<a class="donation" href="#"><span id="{donation_id}"><i class="fas fa-coffee"></i> {donation}</span></a>
</aside>
<main>
<header><span id="server-time"></span></header>
{sections}
</main>
<script>{script}</script>
</body>
</html>
"##,
        badge_id = AUTHOR_BADGE_ID,
        badge = html_escape(&credit.badge()),
        nav = nav,
        name_id = AUTHOR_NAME_ID,
        author = html_escape(&credit.author),
        donation_id = DONATION_TITLE_ID,
        donation = html_escape(&credit.donation_title),
        sections = sections,
        script = SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_carries_credit_and_pages() {
        let html = render(&Credit::default());

        assert!(html.contains(r#"<span id="author-name">M. Nafiurohman</span>"#));
        assert!(html.contains("by M. Nafiurohman"));
        assert!(html.contains("Belikan Developer Kopi"));
        for page in Page::ALL {
            assert!(html.contains(&format!(r#"id="page-{}""#, page.slug())));
        }
    }

    #[test]
    fn test_shell_follows_plain_stream() {
        let html = render(&Credit::default());
        assert!(html.contains("fetch('/stream')"));
        assert!(!html.contains("encoding=br"));
        assert!(html.contains("finally {\n    setTimeout(follow, 3000);"));
    }

    #[test]
    fn test_credit_is_escaped() {
        let html = render(&Credit::new("<script>", "Coffee & cake"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Coffee &amp; cake"));
    }
}
