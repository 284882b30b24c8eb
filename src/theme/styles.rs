//! Global CSS styles for Questboard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --card-black: #000000;
  --surface: #0d0d0d;
  --card-border: #404040;

  --text-primary: #ffffff;
  --text-muted: #a3a3a3;

  --accent: #00ffaa;

  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* === Quest Board === */
.quest-board {
  padding: 2rem;
}

.quest-board__header {
  display: flex;
  align-items: baseline;
  gap: 1rem;
  margin-bottom: 1rem;
}

.page-title {
  font-size: 2rem;
}

.quest-board__count,
.empty-state {
  color: var(--text-muted);
}

.quest-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(min(450px, 100%), 1fr));
  gap: 1.5rem;
}

/* === Quest Card === */
.quest-card {
  width: 450px;
  max-width: 100%;
  height: 250px;
  padding: 20px;
  border: 1px solid var(--card-border);
  border-radius: 20px;
  background-size: cover;
  background-repeat: no-repeat;
  background-position: center;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.quest-card:hover {
  transform: translateY(-5px);
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.5);
}

.quest-card__title {
  font-size: 1.5rem;
  backdrop-filter: blur(2px);
}

.quest-card__description {
  margin-bottom: 13%;
  backdrop-filter: blur(2px);
}

.quest-reward {
  display: flex;
  flex-direction: column;
}

.quest-reward__headline {
  font-size: 1.6rem;
  backdrop-filter: blur(2px);
}

.quest-reward__detail {
  color: var(--accent);
}

.quest-reward__leaderboard,
.quest-card__expiry {
  color: var(--text-muted);
}

.quest-card__footer {
  margin-top: 2%;
}

.check-icon {
  color: var(--accent);
}

/* === Task Drawer === */
.task-drawer {
  position: fixed;
  top: 0;
  right: 0;
  width: 380px;
  height: 100vh;
  padding: 1.5rem;
  background: var(--card-black);
  border-left: 1px solid var(--card-border);
  transform: translateX(100%);
  transition: transform var(--transition-normal);
}

.task-drawer--open {
  transform: translateX(0);
}

.task-drawer__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.task-drawer__close {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

.task-drawer__list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding-left: 1.25rem;
}

.task-drawer__item-description,
.task-drawer__empty {
  color: var(--text-muted);
}
"#;
