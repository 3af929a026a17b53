use chrono::NaiveDate;

use crate::utils::{format_date, next_draw_date};

const STYLE: &str = r#"
    <style>
        body {
            background: linear-gradient(135deg, #f8ffae 0%, #43c6ac 100%);
            font-family: 'Segoe UI', Arial, sans-serif;
            margin: 0;
            padding: 20px;
            min-height: 100vh;
        }
        .container {
            display: flex;
            gap: 30px;
            max-width: 1200px;
            margin: 0 auto;
        }
        .leaderboard {
            flex: 0 0 300px;
            background: rgba(255,255,255,0.9);
            padding: 20px;
            border-radius: 15px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
            max-height: 80vh;
            overflow-y: auto;
        }
        .leaderboard h2 {
            color: #333;
            margin-bottom: 15px;
            text-align: center;
            font-size: 1.3rem;
        }
        .leaderboard-item {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 8px 12px;
            margin: 4px 0;
            background: rgba(67,198,172,0.1);
            border-radius: 8px;
            font-size: 0.9rem;
        }
        .leaderboard-number { font-weight: bold; color: #43c6ac; min-width: 30px; }
        .leaderboard-count { color: #666; }
        .main-content {
            flex: 1;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            min-height: 80vh;
        }
        h1 { color: #333; margin-bottom: 10px; text-shadow: 1px 1px 2px #fff; }
        #dates {
            margin-bottom: 20px;
            color: #222;
            font-size: 1.1rem;
            background: rgba(255,255,255,0.7);
            padding: 10px 20px;
            border-radius: 12px;
        }
        #numbers {
            margin-top: 30px;
            font-size: 2.5rem;
            color: #fff;
            text-shadow: 2px 2px 8px #43c6ac;
        }
        #history { margin-top: 24px; }
        .history-row { margin: 6px 0; }
        .history-id { font-size: 0.95em; color: #888; }
        button {
            background: #43c6ac;
            color: #fff;
            border: none;
            padding: 15px 40px;
            border-radius: 30px;
            font-size: 1.2rem;
            cursor: pointer;
            transition: background 0.3s, transform 0.2s;
        }
        button:hover { background: #191654; transform: scale(1.05); }
        .ball {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            background: #fff;
            color: #43c6ac;
            border-radius: 50%;
            width: 50px;
            height: 50px;
            font-size: 1.5rem;
            margin: 0 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            font-weight: bold;
        }
    </style>"#;

const SCRIPT: &str = r#"
    <script>
        const balls = (numbers) =>
            numbers.map(n => `<span class="ball">${n}</span>`).join('');

        async function loadLeaderboard() {
            const target = document.getElementById('leaderboard-content');
            try {
                const response = await fetch('/leaderboard');
                if (!response.ok) throw new Error(response.statusText);
                const data = await response.json();
                target.innerHTML = data.leaderboard.map(([num, count]) =>
                    `<div class="leaderboard-item">
                        <span class="leaderboard-number">${num}</span>
                        <span class="leaderboard-count">${count} times</span>
                    </div>`
                ).join('');
            } catch (error) {
                console.error('Error loading leaderboard:', error);
                target.innerHTML = '<p>Error loading leaderboard</p>';
            }
        }

        async function loadHistory() {
            const target = document.getElementById('history');
            try {
                const response = await fetch('/draws');
                if (!response.ok) throw new Error(response.statusText);
                const data = await response.json();
                target.innerHTML = data.draws.length === 0 ? '' :
                    '<b>History:</b><br>' + data.draws.map(draw =>
                        `<div class="history-row"><span class="history-id">#${draw.id}</span> ${balls(draw.numbers)}</div>`
                    ).join('');
            } catch (error) {
                console.error('Error loading history:', error);
            }
        }

        async function generateNumbers() {
            const target = document.getElementById('numbers');
            try {
                const response = await fetch('/numbers', { method: 'POST' });
                if (!response.ok) throw new Error(response.statusText);
                const data = await response.json();
                target.innerHTML = balls(data.numbers);
            } catch (error) {
                console.error('Error generating numbers:', error);
                target.innerHTML = '<p>Could not generate numbers</p>';
            }
            loadHistory();
            loadLeaderboard();
        }

        loadLeaderboard();
        loadHistory();
    </script>"#;

/// Renders the single page UI. Dates are computed server side.
pub fn render_index(today: NaiveDate) -> String {
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lotto Number Generator</title>"#,
    );
    html.push_str(STYLE);
    html.push_str("\n</head>\n<body>\n");

    html.push_str(&format!(
        r#"    <div class="container">
        <div class="leaderboard">
            <h2>Number Frequency</h2>
            <div id="leaderboard-content"></div>
        </div>
        <div class="main-content">
            <h1>Lotto Number Generator</h1>
            <div id="dates">
                <span id="today">Today: {}</span><br/>
                <span id="next-draw">Next Lotto Draw: {}</span>
            </div>
            <button onclick="generateNumbers()">Generate Numbers</button>
            <div id="numbers"></div>
            <div id="history"></div>
        </div>
    </div>"#,
        format_date(today),
        format_date(next_draw_date(today)),
    ));

    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}
