/// Renders the index page with the current owner name substituted in.
/// Everything else on the page hydrates itself from the JSON API.
pub fn render_index(owner: &str) -> String {
    INDEX_HTML.replace("{{OWNER}}", &escape_html(owner))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Планер</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Manrope:wght@400;500;700&family=Playfair+Display:wght@500;600&display=swap');

    :root {
      --bg-1: #f6f4ef;
      --bg-2: #e9e3f5;
      --ink: #272625;
      --muted: #8b857d;
      --accent: #2b2a28;
      --card: rgba(255, 255, 255, 0.72);
      --shadow: 0 18px 50px rgba(60, 56, 70, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at 15% 0%, var(--bg-2), transparent 55%),
        linear-gradient(140deg, var(--bg-1), #fbe9dc 65%, #eef3ec 100%);
      color: var(--ink);
      font-family: "Manrope", "Trebuchet MS", sans-serif;
      padding: 32px 24px 64px;
    }

    .serif {
      font-family: "Playfair Display", "Georgia", serif;
    }

    .shell {
      max-width: 1400px;
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    header.top {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 20px;
    }

    .brand .kicker {
      font-size: 0.72rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.3em;
      color: var(--muted);
    }

    .brand h1 {
      margin: 4px 0 0;
      font-size: clamp(2.2rem, 5vw, 3.4rem);
      font-weight: 600;
    }

    .brand h1 .faded {
      color: #c9c3ba;
      font-style: italic;
      font-weight: 500;
    }

    #owner {
      border: none;
      border-bottom: 2px solid rgba(43, 42, 40, 0.12);
      background: transparent;
      font-family: "Playfair Display", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      color: var(--ink);
      min-width: 220px;
      outline: none;
    }

    #owner:focus {
      border-bottom-color: var(--accent);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--card);
      border-radius: 999px;
      box-shadow: var(--shadow);
    }

    .tab {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 12px 26px;
      font-size: 0.9rem;
      font-weight: 700;
      color: var(--muted);
      cursor: pointer;
      transition: all 200ms ease;
    }

    .tab.active {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 22px rgba(43, 42, 40, 0.25);
    }

    .controls {
      display: flex;
      flex-direction: column;
      align-items: flex-end;
      gap: 8px;
    }

    #anchor {
      border: 1px solid rgba(43, 42, 40, 0.12);
      border-radius: 999px;
      padding: 10px 16px;
      background: var(--card);
      font-family: inherit;
      font-size: 0.9rem;
      color: var(--ink);
    }

    #sync {
      appearance: none;
      border: none;
      background: transparent;
      font-size: 0.72rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      color: var(--muted);
      cursor: pointer;
      padding: 6px 2px;
    }

    #sync:hover {
      color: var(--ink);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    /* Weekly planner */
    .week {
      display: flex;
      gap: 18px;
      overflow-x: auto;
      padding: 8px 4px 20px;
    }

    .day-card {
      min-width: 280px;
      width: 300px;
      flex-shrink: 0;
      border-radius: 26px;
      background: var(--card);
      box-shadow: var(--shadow);
      padding: 20px;
      display: flex;
      flex-direction: column;
      gap: 14px;
      border-top: 4px solid transparent;
    }

    .day-card.c-gray { border-top-color: #a8a29a; }
    .day-card.c-red { border-top-color: #d9775f; }
    .day-card.c-blue { border-top-color: #7a93b5; }
    .day-card.c-green { border-top-color: #7aa98a; }

    .day-head {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .day-head .name {
      font-size: 1.4rem;
      font-weight: 600;
    }

    .day-head .num {
      width: 38px;
      height: 38px;
      border-radius: 50%;
      background: white;
      display: grid;
      place-items: center;
      font-weight: 700;
      box-shadow: 0 4px 12px rgba(60, 56, 70, 0.12);
    }

    .day-date {
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.18em;
      color: var(--muted);
    }

    .day-progress {
      height: 4px;
      border-radius: 999px;
      background: rgba(43, 42, 40, 0.08);
      overflow: hidden;
    }

    .day-progress > div {
      height: 100%;
      background: var(--accent);
      transition: width 400ms ease;
    }

    .task-list {
      display: grid;
      gap: 8px;
      min-height: 120px;
    }

    .task-empty {
      color: var(--muted);
      font-style: italic;
      font-size: 0.9rem;
      text-align: center;
      padding: 30px 0;
    }

    .task {
      display: flex;
      align-items: center;
      gap: 10px;
      background: rgba(255, 255, 255, 0.85);
      border-radius: 14px;
      padding: 10px 12px;
    }

    .task .check {
      appearance: none;
      border: 1.5px solid #c9c3ba;
      background: transparent;
      width: 22px;
      height: 22px;
      border-radius: 50%;
      flex-shrink: 0;
      cursor: pointer;
      color: white;
      font-size: 0.7rem;
      line-height: 1;
    }

    .task.done .check {
      border-color: transparent;
      background: var(--accent);
    }

    .task .text {
      flex: 1;
      font-size: 0.92rem;
      font-weight: 500;
    }

    .task.done .text {
      color: var(--muted);
      text-decoration: line-through;
    }

    .task .remove,
    .habit-row .remove {
      appearance: none;
      border: none;
      background: transparent;
      color: #c9c3ba;
      cursor: pointer;
      font-size: 1rem;
      padding: 2px 6px;
    }

    .task .remove:hover,
    .habit-row .remove:hover {
      color: #c63b2b;
    }

    .add-row {
      display: flex;
      gap: 8px;
    }

    .add-row input {
      flex: 1;
      border: 1px solid rgba(43, 42, 40, 0.1);
      border-radius: 12px;
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.9rem;
      background: rgba(255, 255, 255, 0.7);
      outline: none;
    }

    .add-row button {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 0 14px;
      background: var(--accent);
      color: white;
      font-size: 1.1rem;
      cursor: pointer;
    }

    /* Habit tracker */
    .panel {
      background: var(--card);
      border-radius: 30px;
      box-shadow: var(--shadow);
      padding: 32px;
    }

    .panel-head {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-end;
      gap: 16px;
      margin-bottom: 24px;
    }

    .panel-head h2 {
      margin: 0;
      font-size: 2rem;
      font-weight: 600;
    }

    .panel-head p {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .habit-grid {
      overflow-x: auto;
    }

    .habit-row {
      display: grid;
      grid-template-columns: 220px 1fr;
      gap: 16px;
      align-items: center;
      padding: 10px 8px;
      border-radius: 16px;
    }

    .habit-row:hover {
      background: rgba(255, 255, 255, 0.55);
    }

    .habit-row.head {
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.18em;
      color: var(--muted);
    }

    .habit-name {
      display: flex;
      justify-content: space-between;
      align-items: center;
      font-weight: 600;
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    .cells {
      display: grid;
      grid-template-columns: repeat(31, minmax(16px, 1fr));
      gap: 4px;
      min-width: 640px;
    }

    .cells .col {
      text-align: center;
      font-size: 0.6rem;
    }

    .cell {
      appearance: none;
      border: none;
      width: 16px;
      height: 16px;
      margin: 0 auto;
      border-radius: 50%;
      background: rgba(43, 42, 40, 0.1);
      cursor: pointer;
      transform: scale(0.66);
      transition: all 200ms ease;
    }

    .cell:hover {
      transform: scale(0.95);
    }

    .cell.on {
      background: var(--accent);
      transform: scale(1);
    }

    /* Dashboard */
    .bento {
      display: grid;
      gap: 20px;
      grid-template-columns: repeat(12, 1fr);
    }

    .bento .hero {
      grid-column: span 8;
      min-height: 320px;
      display: flex;
      flex-direction: column;
      justify-content: center;
    }

    .bento .side {
      grid-column: span 4;
    }

    .bento .wide {
      grid-column: span 12;
    }

    @media (max-width: 900px) {
      .bento .hero,
      .bento .side,
      .bento .wide {
        grid-column: span 12;
      }
    }

    .hero .kicker {
      font-size: 0.72rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.3em;
      color: var(--muted);
    }

    .hero .rate {
      font-size: clamp(5rem, 12vw, 8.5rem);
      line-height: 1;
      font-weight: 600;
    }

    .hero .rate small {
      font-size: 0.4em;
      color: #c9c3ba;
    }

    .hero .caption {
      margin-top: 18px;
      max-width: 420px;
      font-size: 1.05rem;
      color: var(--muted);
    }

    .hero .caption b {
      color: var(--ink);
    }

    .habit-bars {
      display: grid;
      gap: 18px;
      margin-top: 14px;
    }

    .habit-bar .row {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      margin-bottom: 6px;
      color: var(--muted);
    }

    .habit-bar .track {
      height: 8px;
      border-radius: 999px;
      background: rgba(43, 42, 40, 0.08);
      overflow: hidden;
    }

    .habit-bar .fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 600ms ease;
    }

    .chart {
      display: flex;
      align-items: flex-end;
      gap: 12px;
      height: 180px;
      border-bottom: 1px solid rgba(43, 42, 40, 0.12);
      padding-top: 12px;
    }

    .chart .bar-slot {
      flex: 1;
      height: 100%;
      display: flex;
      align-items: flex-end;
      position: relative;
    }

    .chart .bar {
      width: 100%;
      border-radius: 10px 10px 0 0;
      background: rgba(43, 42, 40, 0.8);
      transition: height 400ms ease;
    }

    .chart .bar.idle {
      background: rgba(43, 42, 40, 0.08);
    }

    .chart .bar-slot .tip {
      position: absolute;
      top: -32px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--accent);
      color: white;
      font-size: 0.7rem;
      padding: 3px 8px;
      border-radius: 6px;
      white-space: nowrap;
      opacity: 0;
      pointer-events: none;
      transition: opacity 150ms ease;
    }

    .chart .bar-slot:hover .tip {
      opacity: 1;
    }

    .chart-labels {
      display: flex;
      gap: 12px;
      margin-top: 8px;
    }

    .chart-labels span {
      flex: 1;
      text-align: center;
      font-size: 0.75rem;
      font-weight: 700;
      color: var(--muted);
    }

    .view {
      display: none;
    }

    .view.active {
      display: block;
    }
  </style>
</head>
<body>
  <div class="shell">
    <header class="top">
      <div class="brand">
        <span class="kicker">Система планирования</span>
        <h1 class="serif">Планер <span class="faded">для</span></h1>
        <input id="owner" value="{{OWNER}}" placeholder="Имя" />
      </div>

      <nav class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="weekly" role="tab" aria-selected="true">Неделя</button>
        <button class="tab" type="button" data-tab="habits" role="tab" aria-selected="false">Ритмы</button>
        <button class="tab" type="button" data-tab="dashboard" role="tab" aria-selected="false">Обзор</button>
      </nav>

      <div class="controls">
        <input type="date" id="anchor" />
        <button id="sync" type="button">Синхронизация с календарём</button>
      </div>
    </header>

    <div class="status" id="status"></div>

    <main>
      <section id="view-weekly" class="view active">
        <div class="week" id="week"></div>
      </section>

      <section id="view-habits" class="view">
        <div class="panel">
          <div class="panel-head">
            <div>
              <h2 class="serif">Ритмы жизни</h2>
              <p>Визуализация вашей дисциплины</p>
            </div>
            <div class="add-row" style="width: 300px">
              <input id="new-habit" placeholder="Добавить трекер..." />
              <button id="add-habit" type="button">+</button>
            </div>
          </div>
          <div class="habit-grid" id="habits"></div>
        </div>
      </section>

      <section id="view-dashboard" class="view">
        <div class="bento">
          <div class="panel hero">
            <span class="kicker">Общая продуктивность</span>
            <div class="rate serif"><span id="rate">0</span><small>%</small></div>
            <p class="caption" id="rate-caption"></p>
          </div>
          <div class="panel side">
            <h2 class="serif" style="margin: 0; font-size: 1.5rem;">Привычки</h2>
            <div class="habit-bars" id="habit-bars"></div>
          </div>
          <div class="panel wide">
            <h2 class="serif" style="margin: 0 0 4px; font-size: 1.5rem;">Динамика недели</h2>
            <p style="margin: 0 0 16px; color: var(--muted); font-size: 0.9rem;">Процент выполнения задач по дням</p>
            <div class="chart" id="chart"></div>
            <div class="chart-labels" id="chart-labels"></div>
          </div>
        </div>
      </section>
    </main>
  </div>

  <script>
    const weekEl = document.getElementById('week');
    const habitsEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');
    const ownerEl = document.getElementById('owner');
    const anchorEl = document.getElementById('anchor');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let state = null;
    let activeTab = 'weekly';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; }, 2500);
      }
    };

    const esc = (value) => {
      const div = document.createElement('div');
      div.textContent = value;
      return div.innerHTML;
    };

    const api = async (path, body) => {
      const res = await fetch(path, body === undefined ? undefined : {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Ошибка запроса');
      }
      return res.json();
    };

    const mutate = async (path, body) => {
      state = await api(path, body);
      render();
    };

    const renderWeek = () => {
      weekEl.innerHTML = state.days.map((day) => {
        const done = day.tasks.filter(t => t.completed).length;
        const total = day.tasks.length;
        const width = total ? (done / total) * 100 : 0;
        const tasks = total === 0
          ? '<div class="task-empty">Свободный день</div>'
          : day.tasks.map(task => `
              <div class="task ${task.completed ? 'done' : ''}">
                <button class="check" data-act="toggle" data-day="${day.id}" data-task="${task.id}">${task.completed ? '✓' : ''}</button>
                <span class="text">${esc(task.text)}</span>
                <button class="remove" data-act="delete" data-day="${day.id}" data-task="${task.id}" title="Удалить">✕</button>
              </div>`).join('');

        return `
          <div class="day-card c-${day.color}">
            <div class="day-head">
              <span class="name serif">${esc(day.name)}</span>
              <span class="num">${day.day_num}</span>
            </div>
            <div class="day-date">${esc(day.date)}</div>
            <div class="day-progress"><div style="width: ${width}%"></div></div>
            <div class="task-list">${tasks}</div>
            <div class="add-row">
              <input placeholder="Новая задача..." data-day-input="${day.id}" />
              <button data-act="add" data-day="${day.id}" type="button">+</button>
            </div>
          </div>`;
      }).join('');
    };

    const renderHabits = () => {
      const header = `
        <div class="habit-row head">
          <div>Привычка</div>
          <div class="cells">${Array.from({ length: 31 }, (_, i) => `<span class="col">${i + 1}</span>`).join('')}</div>
        </div>`;

      const rows = state.habits.map(habit => `
        <div class="habit-row">
          <div class="habit-name" title="${esc(habit.name)}">
            <span>${esc(habit.name)}</span>
            <button class="remove" data-act="del-habit" data-habit="${habit.id}" title="Удалить">✕</button>
          </div>
          <div class="cells">${Array.from({ length: 31 }, (_, i) => {
            const day = i + 1;
            const on = habit.progress[day] === true;
            return `<button class="cell ${on ? 'on' : ''}" data-act="toggle-habit" data-habit="${habit.id}" data-cell="${day}"></button>`;
          }).join('')}</div>
        </div>`).join('');

      habitsEl.innerHTML = header + rows;
    };

    const renderDashboard = async () => {
      const dash = await api('/api/dashboard');
      document.getElementById('rate').textContent = dash.completion_rate;
      document.getElementById('rate-caption').innerHTML =
        `Вы выполнили <b>${dash.completed_tasks}</b> из <b>${dash.total_tasks}</b> задач на этой неделе.` +
        (dash.completion_rate > 80 ? ' Феноменальный результат.' : ' Продолжайте движение.');

      document.getElementById('habit-bars').innerHTML = dash.habits.slice(0, 4).map(habit => `
        <div class="habit-bar">
          <div class="row"><span>${esc(habit.name)}</span><span>${habit.checks}/${habit.target}</span></div>
          <div class="track"><div class="fill" style="width: ${habit.percent}%"></div></div>
        </div>`).join('');

      document.getElementById('chart').innerHTML = dash.day_bars.map(bar => `
        <div class="bar-slot">
          <div class="tip">${bar.done} из ${bar.total} (${bar.percent}%)</div>
          <div class="bar ${bar.total === 0 ? 'idle' : ''}" style="height: ${bar.height}%"></div>
        </div>`).join('');

      document.getElementById('chart-labels').innerHTML = dash.day_bars
        .map(bar => `<span>${esc(bar.name.slice(0, 1))}</span>`)
        .join('');
    };

    const render = () => {
      if (!state) {
        return;
      }
      if (document.activeElement !== ownerEl) {
        ownerEl.value = state.owner;
      }
      anchorEl.value = state.anchor;
      renderWeek();
      renderHabits();
      if (activeTab === 'dashboard') {
        renderDashboard().catch(err => setStatus(err.message, 'error'));
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach(button => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      document.querySelectorAll('.view').forEach(view => {
        view.classList.toggle('active', view.id === `view-${tab}`);
      });
      if (tab === 'dashboard') {
        renderDashboard().catch(err => setStatus(err.message, 'error'));
      }
    };

    document.body.addEventListener('click', (event) => {
      const el = event.target.closest('[data-act]');
      if (!el) {
        return;
      }
      const run = (promise) => promise.catch(err => setStatus(err.message, 'error'));
      switch (el.dataset.act) {
        case 'toggle':
          run(mutate('/api/tasks/toggle', { day_id: el.dataset.day, task_id: el.dataset.task }));
          break;
        case 'delete':
          run(mutate('/api/tasks/delete', { day_id: el.dataset.day, task_id: el.dataset.task }));
          break;
        case 'add': {
          const input = document.querySelector(`[data-day-input="${el.dataset.day}"]`);
          if (input && input.value.trim()) {
            run(mutate('/api/tasks/add', { day_id: el.dataset.day, text: input.value.trim() }));
          }
          break;
        }
        case 'toggle-habit':
          run(mutate('/api/habits/toggle', { habit_id: el.dataset.habit, day: Number(el.dataset.cell) }));
          break;
        case 'del-habit':
          run(mutate('/api/habits/delete', { habit_id: el.dataset.habit }));
          break;
      }
    });

    document.body.addEventListener('keydown', (event) => {
      if (event.key !== 'Enter') {
        return;
      }
      const dayInput = event.target.closest('[data-day-input]');
      if (dayInput && dayInput.value.trim()) {
        mutate('/api/tasks/add', { day_id: dayInput.dataset.dayInput, text: dayInput.value.trim() })
          .catch(err => setStatus(err.message, 'error'));
      }
      if (event.target.id === 'new-habit' && event.target.value.trim()) {
        addHabit();
      }
    });

    const addHabit = () => {
      const input = document.getElementById('new-habit');
      const name = input.value.trim();
      if (!name) {
        return;
      }
      mutate('/api/habits/add', { name })
        .then(() => { input.value = ''; })
        .catch(err => setStatus(err.message, 'error'));
    };

    document.getElementById('add-habit').addEventListener('click', addHabit);

    tabs.forEach(button => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    anchorEl.addEventListener('change', () => {
      if (anchorEl.value) {
        mutate('/api/week/anchor', { date: anchorEl.value })
          .catch(err => setStatus(err.message, 'error'));
      }
    });

    ownerEl.addEventListener('change', () => {
      mutate('/api/owner', { name: ownerEl.value })
        .catch(err => setStatus(err.message, 'error'));
    });

    document.getElementById('sync').addEventListener('click', async () => {
      try {
        const res = await api('/api/sync', {});
        setStatus(res.message, 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    api('/api/state')
      .then(data => { state = data; render(); })
      .catch(err => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
