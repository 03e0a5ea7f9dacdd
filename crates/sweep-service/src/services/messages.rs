//! Reply text catalogs

use sweep_core::Locale;

/// Fixed and templated reply texts for one locale
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

const HELP_JA: &str = "```
ファイル一括削除
ex. /delete-file 2020/01/01 2020/02/01 -ac
<開始日時> <終了日時> 削除対象ファイルのアップロード日時範囲 (例: 2020/01/01, 2020-01-01T09:00)
-f, --from 範囲開始日時 (位置引数より優先)
-t, --to 範囲終了日時 (位置引数より優先)
-ac, --all-channels 全チャンネルのファイルを削除対象にする (指定しない場合: コマンド実行チャンネルのファイルのみ)
-au, --all-users 全ユーザーのファイルを削除対象にする (指定しない場合: コマンド実行者がアップロードしたファイルのみ)
-h, --help ヘルプ
```";

const HELP_EN: &str = "```
Bulk file deletion
ex. /delete-file 2020/01/01 2020/02/01 -ac
<start> <end> upload date range of the files to delete (e.g. 2020/01/01, 2020-01-01T09:00)
-f, --from range start (overrides the positional start)
-t, --to range end (overrides the positional end)
-ac, --all-channels include files from every channel (default: the invoking channel only)
-au, --all-users include files from every user (default: the invoking user only)
-h, --help show this help
```";

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn help(&self) -> &'static str {
        match self.locale {
            Locale::Ja => HELP_JA,
            Locale::En => HELP_EN,
        }
    }

    pub fn nothing_to_delete(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "削除対象のファイルが0件です",
            Locale::En => "There are no files to delete.",
        }
    }

    pub fn lookup_failed(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "ファイル一覧を取得できませんでした。しばらくしてから再度お試しください。",
            Locale::En => "Could not fetch the file list. Please try again later.",
        }
    }

    pub fn deleted(&self, count: usize) -> String {
        match self.locale {
            Locale::Ja => format!("{count}ファイルを削除しました。"),
            Locale::En => format!("Deleted {count} file(s)."),
        }
    }

    pub fn failed(&self, file_name: &str, reason: &str) -> String {
        match self.locale {
            Locale::Ja => format!("Error: Deleting {file_name} is failed ({reason})"),
            Locale::En => format!(" Error: deleting {file_name} failed ({reason})"),
        }
    }

    pub fn remaining(&self, count: usize) -> String {
        match self.locale {
            Locale::Ja => format!(
                "対象ファイルが残り{count}件あります。再度コマンドを実行してください。"
            ),
            Locale::En => {
                format!("{count} matching file(s) remain. Run the command again to continue.")
            }
        }
    }
}
