use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appdist completions bash > ~/.bash_completion.d/appdist\n\n\
                  Generate zsh completions:\n    appdist completions zsh > ~/.zfunc/_appdist\n\n\
                  Generate fish completions:\n    appdist completions fish > ~/.config/fish/completions/appdist.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
