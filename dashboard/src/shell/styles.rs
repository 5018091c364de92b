pub const DASHBOARD_TOKENS: &str = r#"
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #5865f2;
    --accent-bg-hover: #4752c4;
    --accent-text: #ffffff;
    --border-color: #334155;
    --sidebar-bg: #0b1222;
    --input-bg: #0f172a;
    --hover-bg: rgba(255, 255, 255, 0.08);
    --danger-bg: #ef4444;
    --danger-text: #f87171;
    --success-bg: #10b981;
    --warning-bg: #f59e0b;
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
}

:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #5865f2;
    --accent-bg-hover: #4752c4;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;
    --sidebar-bg: #e2e8f0;
    --input-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.08);
    --danger-bg: #dc2626;
    --danger-text: #b91c1c;
    --success-bg: #059669;
    --warning-bg: #d97706;
    --shadow-lg: 0 10px 40px rgba(15, 23, 42, 0.15);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    padding: 0;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}
"#;

pub const DASHBOARD_STYLES: &str = r#"
/* Shell layout */
.dashboard-shell {
    display: flex;
    width: 100%;
    min-height: 100vh;
}

.dashboard-main {
    flex: 1;
    min-width: 0;
    display: flex;
    flex-direction: column;
}

.dashboard-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
    border-bottom: 1px solid var(--border-color);
}

.dashboard-header h1 {
    margin: 0;
    font-size: 1.35rem;
}

.header-actions {
    display: flex;
    gap: 0.5rem;
}

.dashboard-body {
    flex: 1;
    padding: 1.5rem;
    overflow-y: auto;
    /* Room for the floating action bar */
    padding-bottom: 6rem;
}

/* Sidebar */
.sidebar {
    width: 220px;
    flex-shrink: 0;
    background: var(--sidebar-bg);
    border-right: 1px solid var(--border-color);
    display: flex;
    flex-direction: column;
    padding: 0.75rem 0.5rem;
    gap: 0.15rem;
}

.sidebar-brand {
    display: flex;
    flex-direction: column;
    padding: 0.5rem 0.75rem 1rem 0.75rem;
}

.brand-name {
    font-weight: 700;
    font-size: 1.1rem;
}

.brand-server {
    font-size: 0.78rem;
    color: var(--text-muted);
}

.sidebar-link {
    text-align: left;
    padding: 0.5rem 0.75rem;
    background: none;
    border: none;
    border-radius: var(--radius-sm);
    color: var(--text-secondary);
    font-size: 0.92rem;
    cursor: pointer;
}

.sidebar-link:hover {
    background: var(--hover-bg);
    color: var(--text-primary);
}

.sidebar-link-active {
    background: var(--hover-bg);
    color: var(--text-primary);
    font-weight: 600;
}

/* Pages */
.settings-page {
    max-width: 760px;
    outline: none;
}

.page-header h2 {
    margin: 0 0 0.2rem 0;
}

.page-hint {
    margin: 0 0 1.25rem 0;
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.page-status {
    padding: 2rem 0;
    color: var(--text-secondary);
}

.page-status-error {
    color: var(--danger-text);
}

.settings-section {
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    padding: 1rem 1.25rem;
    margin-bottom: 1rem;
}

.settings-section h3 {
    margin: 0 0 0.5rem 0;
    font-size: 1rem;
}

.section-hint {
    margin: 0.25rem 0 0.75rem 0;
    color: var(--text-muted);
    font-size: 0.84rem;
}

.setting-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 0.45rem 0;
}

.setting-row label {
    color: var(--text-secondary);
    font-size: 0.92rem;
}

/* Inputs */
.field-input {
    background: var(--input-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-sm);
    color: var(--text-primary);
    padding: 0.4rem 0.6rem;
    font-size: 0.9rem;
    min-width: 0;
}

.field-input:focus {
    outline: none;
    border-color: var(--accent-bg);
}

.field-short {
    width: 5rem;
}

.field-emoji {
    width: 5rem;
    text-align: center;
}

.field-textarea {
    width: 100%;
    background: var(--input-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-sm);
    color: var(--text-primary);
    padding: 0.5rem 0.6rem;
    font-size: 0.9rem;
    font-family: inherit;
    resize: vertical;
}

.field-warning {
    color: var(--warning-bg);
    font-size: 0.8rem;
}

/* Chips and list rows */
.chip-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.4rem;
    margin-bottom: 0.6rem;
}

.chip-list-empty {
    color: var(--text-muted);
    font-size: 0.84rem;
}

.role-chip {
    display: inline-flex;
    align-items: center;
    gap: 0.3rem;
    background: var(--hover-bg);
    border: 1px solid var(--border-color);
    border-radius: 999px;
    padding: 0.15rem 0.35rem 0.15rem 0.7rem;
    font-size: 0.85rem;
}

.chip-remove {
    background: none;
    border: none;
    color: var(--text-muted);
    cursor: pointer;
    font-size: 0.9rem;
    line-height: 1;
    padding: 0.1rem 0.3rem;
}

.chip-remove:hover {
    color: var(--danger-text);
}

.add-row {
    display: flex;
    gap: 0.5rem;
}

.list-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.35rem 0;
}

.list-row .field-input {
    flex: 1;
}

.inline-check {
    display: inline-flex;
    align-items: center;
    gap: 0.3rem;
    color: var(--text-secondary);
    font-size: 0.84rem;
    white-space: nowrap;
}

/* Buttons */
.btn {
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    border-radius: var(--radius-sm);
    padding: 0.45rem 0.9rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.btn:hover {
    background: var(--accent-bg-hover);
}

.btn:disabled {
    opacity: 0.55;
    cursor: default;
}

.btn-ghost {
    background: none;
    border: 1px solid var(--border-color);
    color: var(--text-secondary);
}

.btn-ghost:hover {
    background: var(--hover-bg);
    color: var(--text-primary);
}

.btn-remove {
    background: none;
    border: 1px solid var(--border-color);
    color: var(--danger-text);
}

.btn-remove:hover {
    background: var(--hover-bg);
}

.btn-danger {
    background: var(--danger-bg);
}

.btn-danger-ghost {
    background: none;
    border: 1px solid var(--danger-bg);
    color: var(--danger-text);
}

.btn-danger-ghost:hover {
    background: var(--hover-bg);
}

.btn-save {
    min-width: 9rem;
}

/* Floating action bar */
.action-bar {
    position: fixed;
    left: 50%;
    bottom: 1.25rem;
    transform: translateX(-50%);
    display: flex;
    align-items: center;
    gap: 1.25rem;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
    padding: 0.7rem 1.1rem;
    z-index: 900;
}

.action-bar-text {
    display: flex;
    flex-direction: column;
    font-size: 0.9rem;
}

.action-bar-stamp {
    color: var(--text-muted);
    font-size: 0.76rem;
}

.action-bar-buttons {
    display: flex;
    gap: 0.5rem;
}

.action-bar-shake {
    animation: bar-shake 0.45s ease;
}

@keyframes bar-shake {
    0%, 100% { transform: translateX(-50%); }
    20% { transform: translateX(calc(-50% - 10px)); }
    40% { transform: translateX(calc(-50% + 8px)); }
    60% { transform: translateX(calc(-50% - 6px)); }
    80% { transform: translateX(calc(-50% + 4px)); }
}

.spinner {
    display: inline-block;
    width: 0.8rem;
    height: 0.8rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: var(--accent-text);
    border-radius: 50%;
    animation: spin 0.7s linear infinite;
    vertical-align: middle;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Modal */
.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.55);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.modal {
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-lg);
    max-width: 26rem;
    padding: 1.25rem 1.5rem;
}

.modal h3 {
    margin: 0 0 0.5rem 0;
}

.modal p {
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.modal-buttons {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
    margin-top: 1rem;
}

/* Toasts */
.toast-stack {
    position: fixed;
    top: 1rem;
    right: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 1100;
}

.toast {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-left: 3px solid var(--accent-bg);
    border-radius: var(--radius-sm);
    box-shadow: var(--shadow-lg);
    padding: 0.55rem 0.8rem;
    max-width: 22rem;
    font-size: 0.88rem;
}

.toast-success {
    border-left-color: var(--success-bg);
}

.toast-info {
    border-left-color: var(--warning-bg);
}

.toast-error {
    border-left-color: var(--danger-bg);
}

.toast-close {
    background: none;
    border: none;
    color: var(--text-muted);
    cursor: pointer;
    font-size: 1rem;
    line-height: 1;
}

.toast-close:hover {
    color: var(--text-primary);
}
"#;
