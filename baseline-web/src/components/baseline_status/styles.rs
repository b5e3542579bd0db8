/// Widget stylesheet, emitted once per widget instance.
pub const STYLES: &str = "
.baseline-status{display:block;border:solid 1px #e8eaed;border-radius:8px;padding:16px 24px 0;max-width:800px;font-family:Roboto,sans-serif;font-size:14px;font-style:normal;color:#202124}
.baseline-status .name{font-weight:normal;font-size:20px;margin:0 0 12px}
.baseline-status summary{display:flex;align-items:center;gap:16px;cursor:pointer;list-style:none;padding-bottom:16px}
.baseline-status summary::-webkit-details-marker{display:none}
.baseline-status .baseline-mark{width:36px;height:20px}
.baseline-status .baseline-status-title{flex:1;display:flex;flex-wrap:wrap;align-items:center;gap:8px 16px}
.baseline-status .baseline-status-headline{font-weight:bold}
.baseline-status .baseline-badge{background:#3367d6;color:#fff;font-size:11px;padding:0 4px;border-radius:2px;text-transform:uppercase;line-height:20px;margin-left:8px}
.baseline-status .baseline-status-browsers{display:flex;gap:16px;margin-left:auto}
.baseline-status .browser{display:inline-flex;align-items:center;gap:2px}
.baseline-status .browser img{width:20px;height:20px}
.baseline-status .support-icon{font-weight:bold;width:14px;text-align:center}
.baseline-status .open-icon{transition:transform .2s}
.baseline-status details[open] .open-icon{transform:rotate(180deg)}
.baseline-status .collapse-content p{margin:0 0 16px}
.baseline-status-pending{min-height:72px;padding-bottom:16px}
.baseline-status[aria-busy=true]{opacity:.6}
";
