use crate::dashboard::Dashboard;

pub fn render_index(dashboard: &Dashboard) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", &escape_html(dashboard.title))
        .replace("{{BG}}", dashboard.theme.background)
        .replace("{{PRIMARY}}", dashboard.theme.primary)
        .replace("{{CAPTION}}", &escape_html(&dashboard.year_caption))
        .replace("{{YEAR_PERCENT}}", &format!("{:.1}", dashboard.year.percent))
        .replace("{{MODE}}", &dashboard.settings.mode.to_string())
        .replace("{{AGE}}", &dashboard.settings.age.to_string())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>VibeCheck 2026</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');

    :root {
      --bg: {{BG}};
      --primary: {{PRIMARY}};
      --ink: #1f2937;
      --muted: #64748b;
      --line: #e2e8f0;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: 260px 1fr;
      transition: background 300ms ease;
    }

    aside {
      padding: 28px 22px;
      border-right: 1px solid var(--line);
      background: rgba(255, 255, 255, 0.6);
      display: grid;
      align-content: start;
      gap: 18px;
    }

    main {
      padding: 32px;
      display: grid;
      gap: 24px;
      align-content: start;
    }

    h1, h2, h3 {
      margin: 0;
    }

    .caption {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .bar {
      height: 14px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .bar > div {
      height: 100%;
      background: var(--primary);
      transition: width 400ms ease;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
      box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
      display: grid;
      gap: 6px;
    }

    .card .value {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .card .delta {
      font-size: 0.85rem;
      color: #16a34a;
    }

    .card .delta.inverse {
      color: #dc2626;
    }

    .forecast {
      display: flex;
      align-items: flex-end;
      gap: 6px;
      height: 160px;
    }

    .forecast div {
      flex: 1;
      background: var(--primary);
      border-radius: 6px 6px 0 0;
      position: relative;
    }

    .forecast span {
      position: absolute;
      bottom: -20px;
      width: 100%;
      text-align: center;
      font-size: 0.7rem;
      color: var(--muted);
    }

    form {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 10px;
    }

    input, select, button {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid var(--line);
    }

    button {
      background: var(--primary);
      color: white;
      border: none;
      cursor: pointer;
    }

    .period h3 {
      margin: 12px 0 6px;
      font-size: 1rem;
      color: var(--muted);
    }

    .goal {
      display: grid;
      grid-template-columns: auto 1fr auto auto;
      gap: 10px;
      align-items: center;
      padding: 6px 0;
    }

    .goal input[type="text"] {
      border: none;
      background: transparent;
    }

    .goal.done input[type="text"] {
      text-decoration: line-through;
      color: var(--muted);
    }

    .tag {
      font-size: 0.75rem;
      padding: 2px 8px;
      border-radius: 999px;
      background: var(--line);
    }

    .toast {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 12px 18px;
      border-radius: 12px;
      background: var(--ink);
      color: white;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    .toast.show {
      opacity: 1;
    }

    @media (max-width: 760px) {
      body {
        grid-template-columns: 1fr;
      }

      form {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <aside>
    <h2>Vibe Control</h2>
    <label>
      <input type="checkbox" id="pro-toggle" />
      Activate Executive Mode
    </label>
    <label>
      Your Age: <strong id="age-value">{{AGE}}</strong>
      <input type="range" id="age" min="1" max="85" value="{{AGE}}" />
    </label>
    <p class="caption">Current Mode: <strong id="mode">{{MODE}}</strong></p>
  </aside>

  <main>
    <h1 id="title">{{TITLE}}</h1>

    <section class="card">
      <h3>Year Lease Progress</h3>
      <div class="bar"><div id="year-bar" style="width: {{YEAR_PERCENT}}%"></div></div>
      <p class="caption" id="year-caption">{{CAPTION}}</p>
    </section>

    <section class="grid" id="metrics"></section>

    <section class="grid">
      <div class="card">
        <h3>The Existential Clock</h3>
        <div class="bar"><div id="life-bar"></div></div>
        <p class="caption" id="life-caption"></p>
      </div>
      <div class="card">
        <h3>12-Month Forecast</h3>
        <div class="forecast" id="forecast"></div>
      </div>
    </section>

    <section class="card">
      <h3>The Resolution Court</h3>
      <div class="bar"><div id="goal-bar"></div></div>
      <p class="caption" id="goal-caption"></p>
      <form id="goal-form">
        <input type="text" id="task" placeholder="What will you conquer?" />
        <input type="number" id="difficulty" min="1" max="10" value="5" />
        <select id="period"></select>
        <button type="submit">Submit to the Court</button>
      </form>
      <div id="goals"></div>
    </section>
  </main>

  <div class="toast" id="toast"></div>

  <script>
    const el = (id) => document.getElementById(id);
    let timeline = [];

    function toast(message) {
      const node = el('toast');
      node.textContent = message;
      node.classList.add('show');
      setTimeout(() => node.classList.remove('show'), 2000);
    }

    async function send(method, url, body) {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['Content-Type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      return fetch(url, options);
    }

    function renderMetrics(metrics) {
      const root = el('metrics');
      root.replaceChildren();
      for (const metric of metrics) {
        const card = document.createElement('div');
        card.className = 'card';
        const label = document.createElement('span');
        label.className = 'caption';
        label.textContent = metric.label;
        const value = document.createElement('span');
        value.className = 'value';
        value.textContent = metric.value;
        const delta = document.createElement('span');
        delta.className = metric.inverse ? 'delta inverse' : 'delta';
        delta.textContent = metric.delta;
        card.append(label, value, delta);
        root.append(card);
      }
    }

    function renderForecast(points) {
      const root = el('forecast');
      root.replaceChildren();
      for (const point of points) {
        const bar = document.createElement('div');
        bar.style.height = `${point.intensity}%`;
        const month = document.createElement('span');
        month.textContent = point.month;
        bar.append(month);
        root.append(bar);
      }
    }

    function renderGoal(goal) {
      const row = document.createElement('div');
      row.className = goal.done ? 'goal done' : 'goal';

      const check = document.createElement('input');
      check.type = 'checkbox';
      check.checked = goal.done;
      check.addEventListener('change', async () => {
        await send('POST', `/api/goals/${goal.id}/toggle`);
        refresh();
      });

      const text = document.createElement('input');
      text.type = 'text';
      text.value = goal.task;
      text.addEventListener('change', async () => {
        await send('PATCH', `/api/goals/${goal.id}`, { task: text.value });
      });

      const tag = document.createElement('span');
      tag.className = 'tag';
      tag.textContent = `${goal.label} (${goal.difficulty}/10)`;

      const remove = document.createElement('button');
      remove.type = 'button';
      remove.textContent = 'Dismiss';
      remove.addEventListener('click', async () => {
        await send('DELETE', `/api/goals/${goal.id}`);
        refresh();
      });

      row.append(check, text, tag, remove);
      return row;
    }

    function renderGoals(groups) {
      const root = el('goals');
      root.replaceChildren();
      for (const group of groups) {
        const section = document.createElement('div');
        section.className = 'period';
        const heading = document.createElement('h3');
        heading.textContent = group.period;
        section.append(heading);
        for (const goal of group.goals) {
          section.append(renderGoal(goal));
        }
        root.append(section);
      }
    }

    function renderPeriods(periods) {
      if (periods.join() === timeline.join()) {
        return;
      }
      timeline = periods;
      const select = el('period');
      select.replaceChildren();
      for (const period of periods) {
        const option = document.createElement('option');
        option.value = period;
        option.textContent = period;
        select.append(option);
      }
    }

    function render(data) {
      document.documentElement.style.setProperty('--bg', data.theme.background);
      document.documentElement.style.setProperty('--primary', data.theme.primary);
      el('title').textContent = data.title;
      el('mode').textContent = data.settings.mode;
      el('pro-toggle').checked = data.settings.mode === 'Pro';
      el('age').value = data.settings.age;
      el('age-value').textContent = data.settings.age;
      el('year-bar').style.width = `${data.year.percent}%`;
      el('year-caption').textContent = data.year_caption;
      el('life-bar').style.width = `${Math.min(data.life.percent, 100)}%`;
      el('life-caption').textContent =
        `${data.life.years_lived} years lived, ${data.life.years_remaining} remaining`;
      el('goal-bar').style.width = `${data.completion_percent}%`;
      el('goal-caption').textContent =
        `${data.completion.completed} of ${data.completion.total} resolutions fulfilled`;
      renderMetrics(data.metrics);
      renderForecast(data.forecast);
      renderGoals(data.goals);
    }

    async function refresh() {
      const [dashRes, periodsRes] = await Promise.all([
        fetch('/api/dashboard'),
        fetch('/api/periods'),
      ]);
      if (periodsRes.ok) {
        renderPeriods(await periodsRes.json());
      }
      if (dashRes.ok) {
        render(await dashRes.json());
      }
    }

    el('pro-toggle').addEventListener('change', async (event) => {
      await send('POST', '/api/settings', { mode: event.target.checked ? 'Pro' : 'Silly' });
      refresh();
    });

    el('age').addEventListener('change', async (event) => {
      await send('POST', '/api/settings', { age: Number(event.target.value) });
      refresh();
    });

    el('goal-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const res = await send('POST', '/api/goals', {
        task: el('task').value,
        difficulty: Number(el('difficulty').value),
        period: el('period').value || null,
      });
      if (res.ok) {
        const goal = await res.json();
        toast(`Filed! The court rules: ${goal.label}`);
        el('task').value = '';
        refresh();
      }
    });

    refresh();
  </script>
</body>
</html>
"#;
