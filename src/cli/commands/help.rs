use crate::cli::Output;

/// Print help; pre-commit's own help for the first config follows
pub async fn execute(output: &Output) {
    output.plain(&format!(
        "usage: {name} [-h] [-V] {{install,uninstall,help,*}} ...

positional arguments:
    install             Install the {name} executable as a git hook symlink.
    uninstall           Uninstall the {name} hook symlink.
    help                Show help for a specific command of the {name}
                        and the first pre-commit and exit.
    *                   Run pre-commit(s) with the command and arguments.

optional arguments:
  -h, --help            show help message of the {name} and the first
                        pre-commit and exit
  -V, --version         show version number of the {name} and all
                        pre-commits and exit
",
        name = crate::NAME
    ));
}
