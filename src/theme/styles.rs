//! Global CSS for the Spiretide chrome.
//!
//! Storm-and-ember table aesthetic: dark slate felt, brass accents, parchment
//! text. The `window-*`, `darkerbg`, `hidden`, and `cancel` class names are a
//! stable contract with the overlay component; renaming them breaks styling.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-deep: #10151c;
  --slate-felt: #1a222e;
  --slate-border: #2c3a4c;

  /* BRASS (Accents, controls) */
  --brass: #b8923e;
  --brass-bright: #e0b964;
  --brass-glow: rgba(224, 185, 100, 0.35);

  /* STORM (Highlights, danger) */
  --storm-blue: #5f8fff;
  --ember: #ff6d4d;

  /* TEXT */
  --parchment: #efe6d0;
  --parchment-dim: rgba(239, 230, 208, 0.7);

  /* Backdrops */
  --veil: rgba(8, 10, 14, 0.55);
  --veil-dark: rgba(8, 10, 14, 0.85);

  /* Typography */
  --font-display: 'IM Fell English', Georgia, serif;
  --font-body: 'Inter', 'Helvetica Neue', sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--slate-deep);
  color: var(--parchment);
  font-family: var(--font-body);
  overflow: hidden;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

a {
  color: var(--storm-blue);
  text-decoration: none;
}

/* === Landing === */
.landing {
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.landing-title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  letter-spacing: 0.08em;
  color: var(--brass-bright);
  text-shadow: 0 0 24px var(--brass-glow);
}

.tagline {
  margin-top: 0.75rem;
  color: var(--parchment-dim);
  font-style: italic;
}

.btn-play {
  margin-top: 2.5rem;
  padding: 0.75rem 3rem;
  font-size: 1.25rem;
  border: 1px solid var(--brass);
  border-radius: 4px;
  transition: box-shadow var(--transition-normal);
}

.btn-play:hover {
  box-shadow: 0 0 18px var(--brass-glow);
}

/* === Card table === */
.table {
  position: relative;
  height: 100vh;
}

.table-felt {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  padding: 3rem 4rem;
  background: radial-gradient(ellipse at center, var(--slate-felt), var(--slate-deep));
}

.spire {
  width: 72px;
  height: 40%;
  border: 1px solid var(--slate-border);
  border-radius: 6px 6px 0 0;
  background: linear-gradient(to top, var(--slate-border), transparent);
}

.spire-theirs {
  opacity: 0.6;
}

.table-hint {
  position: absolute;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--parchment-dim);
  font-size: 0.875rem;
}

/* === Button bar === */
.button-bar {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  display: flex;
  gap: 0.5rem;
  z-index: 10;
}

.bar-button {
  width: 2.25rem;
  height: 2.25rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--slate-border);
  border-radius: 4px;
  background: var(--slate-felt);
  color: var(--parchment-dim);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.bar-button:hover {
  color: var(--brass-bright);
  border-color: var(--brass);
}

/* === Overlay window === */
.window-bg {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: var(--veil);
  outline: none;
}

.window-bg.darkerbg {
  background: var(--veil-dark);
}

.window-outerwrapper {
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.window-wrapper {
  position: relative;
  min-width: 320px;
  max-width: 480px;
  max-height: 85vh;
  overflow-y: auto;
  padding: 2rem 2.5rem;
  background: var(--slate-felt);
  border: 1px solid var(--brass);
  border-radius: 8px;
  box-shadow: 0 8px 40px rgba(0, 0, 0, 0.6);
}

.window-logo {
  margin: 0 auto 1rem;
  text-align: center;
  font-family: var(--font-display);
  font-size: 1.75rem;
  letter-spacing: 0.08em;
  color: var(--brass-bright);
}

.window-logo.hidden {
  display: none;
}

.window-wrapper .cancel {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
  width: 1.75rem;
  height: 1.75rem;
  border: 1px solid var(--slate-border);
  border-radius: 50%;
  transition: border-color var(--transition-fast);
}

.window-wrapper .cancel::before {
  content: '\00D7';
  color: var(--parchment-dim);
}

.window-wrapper .cancel:hover {
  border-color: var(--ember);
}

.tooltip-host {
  display: contents;
}

/* === Screen content === */
.screen-body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.screen-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  color: var(--brass-bright);
}

.pref-row, .volume-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.volume-row input[type='range'] {
  flex: 1;
  accent-color: var(--brass);
}

.volume-value {
  min-width: 3ch;
  text-align: right;
  color: var(--parchment-dim);
}

.lang-options {
  display: flex;
  gap: 0.5rem;
}

.lang-option {
  padding: 0.4rem 1rem;
  border: 1px solid var(--slate-border);
  border-radius: 4px;
  transition: border-color var(--transition-fast);
}

.lang-option.selected {
  border-color: var(--brass);
  color: var(--brass-bright);
}

.confirm {
  align-self: flex-end;
  padding: 0.5rem 1.5rem;
  border: 1px solid var(--brass);
  border-radius: 4px;
}

.confirm:hover {
  box-shadow: 0 0 12px var(--brass-glow);
}

.help-text, .notice-text {
  color: var(--parchment-dim);
  line-height: 1.5;
}

/* === Narrow mobile === */
@media (max-width: 600px) {
  .window-wrapper {
    min-width: 0;
    width: calc(100vw - 2rem);
    padding: 1.25rem 1rem;
  }

  .table-felt {
    padding: 1.5rem;
  }
}
"#;
